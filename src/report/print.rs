use std::fmt;

use crate::config::{Notation, PrintConfig};
use crate::math::dense::DenseArray;

/// Render an array as nested brackets, one innermost row per line.
///
/// Axes longer than twice `edge_items` show only their leading and trailing
/// entries, with `...` in between.
pub fn format_array<T>(array: &DenseArray<T>, config: &PrintConfig) -> String
where
    T: fmt::Display + fmt::LowerExp,
{
    Rendered { array, config }.to_string()
}

/// Write the rendering of `format_array` into any formatter or buffer.
pub fn write_array<W, T>(out: &mut W, array: &DenseArray<T>, config: &PrintConfig) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    T: fmt::Display + fmt::LowerExp,
{
    if array.rank() == 0 {
        return out.write_str("[]");
    }
    render_axis(out, array.shape(), array.as_slice(), 0, config)
}

struct Rendered<'a, T> {
    array: &'a DenseArray<T>,
    config: &'a PrintConfig,
}

impl<T: fmt::Display + fmt::LowerExp> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_array(f, self.array, self.config)
    }
}

fn render_axis<W, T>(
    out: &mut W,
    dims: &[usize],
    data: &[T],
    depth: usize,
    config: &PrintConfig,
) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    T: fmt::Display + fmt::LowerExp,
{
    let len = dims[0];
    let inner = &dims[1..];
    let stride: usize = inner.iter().product();

    out.write_char('[')?;
    for (n, slot) in visible_slots(len, config.edge_items).into_iter().enumerate() {
        if n > 0 {
            if inner.is_empty() {
                out.write_str(", ")?;
            } else {
                write!(out, ",\n{}", " ".repeat(depth + 1))?;
            }
        }
        match slot {
            None => out.write_str("...")?,
            Some(i) if inner.is_empty() => write_value(out, &data[i], config)?,
            Some(i) => render_axis(
                out,
                inner,
                &data[i * stride..(i + 1) * stride],
                depth + 1,
                config,
            )?,
        }
    }
    out.write_char(']')
}

/// Positions to print along one axis; `None` marks the elided middle.
fn visible_slots(len: usize, edge_items: Option<usize>) -> Vec<Option<usize>> {
    match edge_items {
        Some(edge) if edge.checked_mul(2).map_or(false, |both| len > both) => (0..edge)
            .map(Some)
            .chain(std::iter::once(None))
            .chain((len - edge..len).map(Some))
            .collect(),
        _ => (0..len).map(Some).collect(),
    }
}

fn write_value<W, T>(out: &mut W, value: &T, config: &PrintConfig) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    T: fmt::Display + fmt::LowerExp,
{
    match config.notation {
        Notation::Fixed => write!(out, "{:.*}", config.precision, value),
        Notation::Scientific => write!(out, "{:.*e}", config.precision, value),
    }
}
