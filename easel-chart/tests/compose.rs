use std::sync::{Arc, Mutex};

use easel_chart::prelude::*;
use easel_geom::Point;
use easel_layout::EaselLayoutError;
use easel_scene::RectOp;
use easel_text::measurement::TextBounds;
use float_cmp::assert_approx_eq;

/// Measurer that reports the same extent for every string.
struct FixedMeasurer(Size);

impl TextMeasurer for FixedMeasurer {
    fn measure(&self, _text: &str, _font: &FontSpec) -> TextBounds {
        TextBounds {
            width: self.0.width,
            height: self.0.height,
            ascent: self.0.height * 0.8,
            descent: self.0.height * 0.2,
        }
    }
}

struct StubPlot;

impl LegendItemSource for StubPlot {
    fn legend_items(&self) -> Vec<LegendItem> {
        Vec::new()
    }
}

impl Plot for StubPlot {
    fn label(&self) -> &str {
        "plot"
    }

    fn render(&self, ctx: &mut RenderCtx<'_>, area: Rect) -> Result<(), EaselLayoutError> {
        // Marker op so tests can recognize the plot in the recording
        ctx.canvas
            .submit(SceneOp::Rect(RectOp::stroked(area, Color::BLACK, 1.0)));
        Ok(())
    }
}

struct MutableSource {
    items: Mutex<Vec<LegendItem>>,
}

impl LegendItemSource for MutableSource {
    fn legend_items(&self) -> Vec<LegendItem> {
        self.items.lock().unwrap().clone()
    }
}

fn bare_title(chart: &mut Chart, tooltip: &str) {
    let title = chart.title.as_mut().unwrap();
    title.chrome = BlockChrome::default();
    title.tooltip = Some(tooltip.to_string());
}

#[test]
fn test_top_title_stretches_and_shrinks_remaining() -> Result<(), EaselChartError> {
    // A 200x30 title docked top into a 400x300 canvas spans the full width
    // and leaves (0, 30, 400, 270) for the plot.
    let measurer = FixedMeasurer(Size::new(200.0, 30.0));
    let mut chart = Chart::new(Box::new(StubPlot)).with_title("Title");
    bare_title(&mut chart, "title");

    let mut recorder = SceneRecorder::new();
    let info = chart.render(Rect::new(0.0, 0.0, 400.0, 300.0), &measurer, &mut recorder)?;

    assert_eq!(info.plot_area, Rect::new(0.0, 30.0, 400.0, 270.0));
    let title_entity = info
        .entities
        .iter()
        .find(|e| e.tooltip.as_deref() == Some("title"))
        .unwrap();
    assert_eq!(title_entity.area, Rect::new(0.0, 0.0, 400.0, 30.0));
    Ok(())
}

#[test]
fn test_docks_shrink_monotonically_in_registration_order() -> Result<(), EaselChartError> {
    let measurer = FixedMeasurer(Size::new(50.0, 20.0));
    let mut chart = Chart::new(Box::new(StubPlot)).with_title("main");
    bare_title(&mut chart, "main");

    let mut bottom = TextTitle::new("bottom", FontSpec::default()).with_slot(Slot::Bottom);
    bottom.chrome = BlockChrome::default();
    chart.add_subtitle(Title::Text(bottom));

    let mut left = TextTitle::new("left", FontSpec::default()).with_slot(Slot::Left);
    left.chrome = BlockChrome::default();
    chart.add_subtitle(Title::Text(left));

    let mut recorder = SceneRecorder::new();
    let info = chart.render(Rect::new(0.0, 0.0, 400.0, 300.0), &measurer, &mut recorder)?;

    // Top consumed 20, bottom consumed 20, left consumed 50
    assert_eq!(info.plot_area, Rect::new(50.0, 20.0, 350.0, 260.0));
    Ok(())
}

#[test]
fn test_exhausted_area_skips_remaining_docks() -> Result<(), EaselChartError> {
    let measurer = FixedMeasurer(Size::new(50.0, 30.0));
    let mut chart = Chart::new(Box::new(StubPlot)).with_title("main");
    bare_title(&mut chart, "main");

    let mut second = TextTitle::new("second", FontSpec::default()).with_tooltip("second");
    second.chrome = BlockChrome::default();
    chart.add_subtitle(Title::Text(second));

    // The title consumes the full 30px height; the subtitle finds nothing
    // left and is skipped without error.
    let mut recorder = SceneRecorder::new();
    let info = chart.render(Rect::new(0.0, 0.0, 100.0, 30.0), &measurer, &mut recorder)?;

    assert_approx_eq!(f32, info.plot_area.height, 0.0);
    assert!(info
        .entities
        .iter()
        .all(|e| e.tooltip.as_deref() != Some("second")));
    Ok(())
}

#[test]
fn test_invalid_edge_aborts_whole_pass() {
    let measurer = FixedMeasurer(Size::new(50.0, 20.0));
    let mut chart = Chart::new(Box::new(StubPlot)).with_title("main");
    bare_title(&mut chart, "main");

    let mut bad = TextTitle::new("bad", FontSpec::default()).with_slot(Slot::Center);
    bad.chrome = BlockChrome::default();
    chart.add_subtitle(Title::Text(bad));

    let mut after = TextTitle::new("after", FontSpec::default());
    after.chrome = BlockChrome::default();
    chart.add_subtitle(Title::Text(after));

    let mut recorder = SceneRecorder::new();
    let result = chart.render(Rect::new(0.0, 0.0, 400.0, 300.0), &measurer, &mut recorder);
    assert!(matches!(
        result,
        Err(EaselChartError::UnsupportedEdge(Slot::Center))
    ));

    // Only the background fill and the main title's text were drawn; nothing
    // from the failing subtitle onward, and no plot marker.
    assert_eq!(recorder.ops.len(), 2);
    assert!(matches!(recorder.ops[0], SceneOp::Rect(_)));
    assert!(matches!(recorder.ops[1], SceneOp::Text(_)));
}

#[test]
fn test_legend_reflects_live_source_between_renders() -> Result<(), EaselChartError> {
    let source = Arc::new(MutableSource {
        items: Mutex::new(vec![LegendItem::new("series-1", Color::rgb(1.0, 0.0, 0.0))]),
    });
    let mut chart = Chart::new(Box::new(StubPlot));
    chart.add_legend(LegendTitle::new(source.clone()));

    let measurer = HeuristicMeasurer::default();
    let area = Rect::new(0.0, 0.0, 400.0, 300.0);

    let symbol_count = |recorder: &SceneRecorder| {
        recorder
            .iter()
            .filter(|op| matches!(op, SceneOp::Symbol(_)))
            .count()
    };

    let mut recorder = SceneRecorder::new();
    chart.render(area, &measurer, &mut recorder)?;
    assert_eq!(symbol_count(&recorder), 1);

    source
        .items
        .lock()
        .unwrap()
        .push(LegendItem::new("series-2", Color::rgb(0.0, 0.0, 1.0)));

    // No invalidation call between renders
    let mut recorder = SceneRecorder::new();
    chart.render(area, &measurer, &mut recorder)?;
    assert_eq!(symbol_count(&recorder), 2);
    Ok(())
}

#[test]
fn test_hit_testing_prefers_topmost_entity() -> Result<(), EaselChartError> {
    let measurer = FixedMeasurer(Size::new(50.0, 20.0));
    let mut chart = Chart::new(Box::new(StubPlot)).with_title("main");
    bare_title(&mut chart, "title-tip");

    let mut recorder = SceneRecorder::new();
    let info = chart.render(Rect::new(0.0, 0.0, 400.0, 300.0), &measurer, &mut recorder)?;

    let in_title = info.entities.find_containing(Point::new(200.0, 10.0)).unwrap();
    assert_eq!(in_title.tooltip.as_deref(), Some("title-tip"));

    let in_plot = info.entities.find_containing(Point::new(200.0, 150.0)).unwrap();
    assert_eq!(in_plot.tooltip.as_deref(), Some("plot"));
    Ok(())
}

#[test]
fn test_full_render_op_ordering() -> Result<(), EaselChartError> {
    let source = Arc::new(MutableSource {
        items: Mutex::new(vec![LegendItem::new("series-1", Color::rgb(1.0, 0.0, 0.0))]),
    });
    let mut chart = Chart::new(Box::new(StubPlot)).with_title("Demo");
    chart.add_legend(LegendTitle::new(source));

    let measurer = HeuristicMeasurer::default();
    let mut recorder = SceneRecorder::new();
    chart.render(Rect::new(0.0, 0.0, 400.0, 300.0), &measurer, &mut recorder)?;

    // Background first, plot marker last, title text before the legend's
    // symbol sample.
    assert!(matches!(recorder.ops.first(), Some(SceneOp::Rect(_))));
    assert!(matches!(recorder.ops.last(), Some(SceneOp::Rect(_))));
    let first_text = recorder
        .iter()
        .position(|op| matches!(op, SceneOp::Text(_)))
        .unwrap();
    let first_symbol = recorder
        .iter()
        .position(|op| matches!(op, SceneOp::Symbol(_)))
        .unwrap();
    assert!(first_text < first_symbol);
    Ok(())
}

#[test]
fn test_theme_set_after_title_restyles_title_font() {
    let custom = ChartTheme {
        title_font: FontSpec::bold("serif", 30.0),
        ..ChartTheme::default()
    };
    let chart = Chart::new(Box::new(StubPlot))
        .with_title("Demo")
        .with_theme(custom.clone());
    assert_eq!(chart.title.as_ref().unwrap().font, custom.title_font);

    // An explicitly customized title font survives a theme swap.
    let hand_picked = FontSpec::new("monospace", 9.0);
    let mut chart = Chart::new(Box::new(StubPlot)).with_title("Demo");
    chart.title.as_mut().unwrap().font = hand_picked.clone();
    let chart = chart.with_theme(custom);
    assert_eq!(chart.title.as_ref().unwrap().font, hand_picked);
}
