use std::sync::Arc;

use easel_chart::prelude::*;
use easel_layout::EaselLayoutError;
use easel_scene::RectOp;

/// A minimal bar plot: fixed values, no axes or scales.
struct BarPlot {
    values: Vec<(String, f32, Color)>,
}

impl LegendItemSource for BarPlot {
    fn legend_items(&self) -> Vec<LegendItem> {
        self.values
            .iter()
            .map(|(label, _, color)| {
                let mut item = LegendItem::new(label.clone(), *color);
                item.tooltip = Some(format!("series {label}"));
                item
            })
            .collect()
    }
}

impl Plot for BarPlot {
    fn label(&self) -> &str {
        "bar plot"
    }

    fn render(&self, ctx: &mut RenderCtx<'_>, area: Rect) -> Result<(), EaselLayoutError> {
        let max = self
            .values
            .iter()
            .map(|(_, v, _)| *v)
            .fold(f32::EPSILON, f32::max);
        let bar_width = area.width / self.values.len() as f32;
        for (index, (_, value, color)) in self.values.iter().enumerate() {
            let height = area.height * value / max;
            let bar = Rect::new(
                area.x + index as f32 * bar_width + bar_width * 0.1,
                area.max_y() - height,
                bar_width * 0.8,
                height,
            );
            ctx.canvas.submit(SceneOp::Rect(RectOp::filled(bar, *color)));
            ctx.add_entity(bar, Some(format!("{value}").as_str()), None);
        }
        Ok(())
    }
}

fn main() -> Result<(), EaselChartError> {
    tracing_subscriber::fmt::init();

    let plot = Arc::new(BarPlot {
        values: vec![
            ("apples".to_string(), 12.0, Color::rgb(0.8, 0.2, 0.2)),
            ("pears".to_string(), 7.5, Color::rgb(0.2, 0.6, 0.3)),
            ("plums".to_string(), 9.0, Color::rgb(0.2, 0.3, 0.8)),
        ],
    });

    let mut chart = Chart::new(Box::new(BarPlot {
        values: plot.values.clone(),
    }))
    .with_title("Fruit sales")
    .with_border(BorderStyle::line(1.0, Color::BLACK));
    chart.add_legend(LegendTitle::new(plot));

    let measurer = HeuristicMeasurer::default();
    let mut recorder = SceneRecorder::new();
    let info = chart.render(Rect::new(0.0, 0.0, 640.0, 480.0), &measurer, &mut recorder)?;

    println!("chart area: {:?}", info.chart_area);
    println!("plot area:  {:?}", info.plot_area);
    println!("{} draw ops, {} entities", recorder.len(), info.entities.len());
    for entity in info.entities.iter() {
        println!("  entity {:?} tooltip={:?}", entity.area, entity.tooltip);
    }
    Ok(())
}
