use crate::entities::{Bar, Plan};
use crate::io::svg::svg_util::{self, SvgDrawOptions};
use itertools::Itertools;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

/// Draws a cutting diagram: one horizontal strip per bar, pieces proportional to their length,
/// followed by their overhead and the offcut that remains.
pub fn plan_to_svg(plan: &Plan, options: SvgDrawOptions, title: &str) -> Document {
    let theme = &options.theme;

    let max_length = plan
        .bars
        .iter()
        .map(|bar| bar.stock.get())
        .max()
        .unwrap_or(1000) as f32;
    let bar_height = max_length * options.bar_height;
    let gap = bar_height;
    let margin = max_length * 0.05;
    let font_size = bar_height * 0.45;
    let stroke_width = max_length * 0.0005 * theme.stroke_width_multiplier;

    let header = Text::new(format!(
        "bars: {} | stock: {} mm | waste: {} mm ({:.1}%) | {}",
        plan.n_bars(),
        plan.total_stock_length(),
        plan.waste(),
        plan.waste_pct(),
        title
    ))
    .set("x", 0.0)
    .set("y", -gap)
    .set("font-size", font_size)
    .set("font-family", "monospace")
    .set("font-weight", "500");

    let mut bars_group = Group::new().set("id", "bars");
    for (i, bar) in plan.bars.iter().enumerate() {
        let y = i as f32 * (bar_height + gap);
        let style = BarStyle {
            y,
            height: bar_height,
            font_size,
            stroke_width,
        };
        bars_group = bars_group.add(bar_to_group(i, bar, &style, options));
    }

    let mut content_height = plan.bars.len() as f32 * (bar_height + gap);

    let unplaced = match plan.unplaced.is_empty() {
        true => None,
        false => {
            let text = Text::new(format!(
                "unplaced ({}): {}",
                plan.n_unplaced(),
                plan.unplaced
                    .iter()
                    .map(|p| format!("{} {} mm", p.label(), p.length()))
                    .join(", ")
            ))
            .set("x", 0.0)
            .set("y", content_height + 0.5 * gap)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("fill", format!("{}", theme.offcut_fill));
            content_height += gap;
            Some(text)
        }
    };

    let mut document = Document::new()
        .set(
            "viewBox",
            (
                -margin,
                -2.0 * gap,
                max_length + 2.0 * margin,
                content_height + 3.0 * gap,
            ),
        )
        .add(header)
        .add(bars_group);

    if let Some(text) = unplaced {
        document = document.add(text);
    }
    document
}

struct BarStyle {
    y: f32,
    height: f32,
    font_size: f32,
    stroke_width: f32,
}

fn bar_to_group(index: usize, bar: &Bar, style: &BarStyle, options: SvgDrawOptions) -> Group {
    let theme = &options.theme;
    let &BarStyle {
        y,
        height,
        font_size,
        stroke_width,
    } = style;
    let piece_stroke = svg_util::change_brightness(theme.piece_fill, 0.5);

    let mut group = Group::new()
        .set("id", format!("bar_{index}"))
        .add(Title::new(format!(
            "bar {}, stock: {} mm, pieces: {}, remainder: {} mm",
            index + 1,
            bar.stock.get(),
            bar.n_pieces(),
            bar.remainder()
        )))
        .add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", y)
                .set("width", bar.stock.get() as f32)
                .set("height", height)
                .set("fill", format!("{}", theme.bar_fill))
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        )
        .add(
            Text::new(format!(
                "#{} {} mm | rest: {} mm",
                index + 1,
                bar.stock.get(),
                bar.remainder()
            ))
            .set("x", 0.0)
            .set("y", y - 0.25 * height)
            .set("font-size", font_size)
            .set("font-family", "monospace"),
        );

    let mut cursor = 0.0;
    for piece in bar.pieces() {
        let length = piece.length() as f32;
        group = group.add(
            Rectangle::new()
                .set("x", cursor)
                .set("y", y)
                .set("width", length)
                .set("height", height)
                .set("fill", format!("{}", theme.piece_fill))
                .set("stroke", format!("{piece_stroke}"))
                .set("stroke-width", stroke_width)
                .add(Title::new(format!("{}: {} mm", piece.label(), piece.length()))),
        );
        if options.piece_labels {
            group = group.add(
                Text::new(format!("{} ({})", piece.label(), piece.length()))
                    .set("x", cursor + 0.5 * length)
                    .set("y", y + 0.5 * height)
                    .set("font-size", 0.8 * font_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            );
        }
        cursor += length;

        let overhead = bar.overhead_per_piece as f32;
        if options.draw_overhead && bar.overhead_per_piece > 0 {
            group = group.add(
                Rectangle::new()
                    .set("x", cursor)
                    .set("y", y)
                    .set("width", overhead)
                    .set("height", height)
                    .set("fill", format!("{}", theme.overhead_fill)),
            );
        }
        cursor += overhead;
    }

    if bar.remainder() > 0 {
        group = group.add(
            Rectangle::new()
                .set("x", cursor)
                .set("y", y)
                .set("width", bar.remainder() as f32)
                .set("height", height)
                .set("fill", format!("{}", theme.offcut_fill))
                .set("fill-opacity", "0.5")
                .add(Title::new(format!("offcut: {} mm", bar.remainder()))),
        );
    }

    group
}
