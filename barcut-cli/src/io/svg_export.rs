use barcut::entities::{Bar, CuttingPlan};
use svg::Document;
use svg::node::element::{Group, Rectangle, Text};

use crate::io::svg_util::SvgDrawOptions;

/// Draws every bar of the plan as a row: cuts from left to right, kerfs in between,
/// the unusable margin at the right end of the bar.
pub fn plan_to_svg(plan: &CuttingPlan, options: SvgDrawOptions, title: &str) -> Document {
    let stock = plan.stock();
    let bar_length = stock.bar_length();
    let bar_height = bar_length * options.bar_height;
    let row_height = bar_height * 1.5;
    let font_size = bar_height * 0.5;
    let theme = &options.theme;
    let stroke_width = bar_length * 0.0005 * theme.stroke_width_multiplier;

    let label = Text::new(format!(
        "{} | bars: {} | usable: {} | kerf: {} | utilization: {:.3}%",
        title,
        plan.n_bars(),
        stock.usable_length(),
        stock.kerf_loss(),
        plan.utilization() * 100.0
    ))
    .set("x", 0.0)
    .set("y", -0.5 * row_height)
    .set("font-size", font_size)
    .set("font-family", "monospace")
    .set("font-weight", "500");

    let mut document = Document::new().add(label);

    for (i, bar) in plan.bars().iter().enumerate() {
        let y = i as f32 * row_height;
        document = document.add(bar_group(bar, plan, options, y, bar_height, stroke_width));
    }

    let margin = bar_length * 0.05;
    let height = plan.n_bars() as f32 * row_height + row_height;
    document.set(
        "viewBox",
        (-margin, -row_height, bar_length + 2.0 * margin, height + margin),
    )
}

fn bar_group(
    bar: &Bar,
    plan: &CuttingPlan,
    options: SvgDrawOptions,
    y: f32,
    bar_height: f32,
    stroke_width: f32,
) -> Group {
    let stock = plan.stock();
    let theme = &options.theme;
    let usable_length = stock.usable_length();

    let rect = |x: f32, width: f32, fill: String| {
        Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", width)
            .set("height", bar_height)
            .set("fill", fill)
            .set("stroke", "black")
            .set("stroke-width", stroke_width)
    };

    let mut group = Group::new()
        .add(rect(0.0, stock.bar_length(), theme.bar_fill.to_string()))
        .add(rect(
            usable_length,
            stock.unusable_length(),
            theme.unusable_fill.to_string(),
        ));

    let mut x = 0.0;
    for &size in bar.cuts() {
        group = group.add(rect(x, size, theme.cut_fill.to_string()));
        if options.label_cuts {
            group = group.add(
                Text::new(size.to_string())
                    .set("x", x + 0.5 * size)
                    .set("y", y + 0.65 * bar_height)
                    .set("font-size", bar_height * 0.4)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle"),
            );
        }
        x += size;

        //the kerf of the last cut can run past the usable length
        let kerf = f32::min(stock.kerf_loss(), usable_length - x);
        if options.draw_kerf && kerf > 0.0 {
            group = group.add(rect(x, kerf, theme.kerf_fill.to_string()));
        }
        x += stock.kerf_loss();
    }

    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use barcut::entities::{RequirementSet, StockProfile};

    #[test]
    fn one_rectangle_per_cut_and_kerf() {
        let profile = StockProfile::new(100.0, 5.0, 1.0).unwrap();
        let reqs = RequirementSet::new([(3, 40.0), (2, 20.0)]).unwrap();
        let plan = barcut::pack(&profile, reqs).unwrap();

        let svg = plan_to_svg(&plan, SvgDrawOptions::default(), "shelf").to_string();
        //2 bars: bar + margin rectangles, 5 cuts, 5 kerfs
        assert_eq!(svg.matches("<rect").count(), 2 * 2 + 5 + 5);
        assert!(svg.contains("shelf | bars: 2"));
    }
}
