use crate::ops::SceneOp;

/// The abstract draw capability consumed by the layout engine.
///
/// Submission order is z-order: later ops draw on top of earlier ones.
pub trait Canvas {
    fn submit(&mut self, op: SceneOp);
}

/// A [`Canvas`] that records every submitted op in order.
///
/// Used by tests and by headless consumers that hand the recorded ops to a
/// renderer after the layout pass completes.
#[derive(Debug, Default, Clone)]
pub struct SceneRecorder {
    pub ops: Vec<SceneOp>,
}

impl SceneRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneOp> {
        self.ops.iter()
    }
}

impl Canvas for SceneRecorder {
    fn submit(&mut self, op: SceneOp) {
        self.ops.push(op);
    }
}
