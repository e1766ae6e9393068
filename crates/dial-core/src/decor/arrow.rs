#![forbid(unsafe_code)]

//! SVG markup for the swipe instruction arrow.

const STROKE: &str = "#4bb8e9";

/// Curved double-headed arrow hinting at a horizontal swipe.
#[must_use]
pub fn swipe_arrow_svg(width: u32, height: u32) -> String {
    let w = f64::from(width);
    let h = f64::from(height);
    let pad = (w / 10.0).max(4.0);
    let (x0, x1) = (pad, w - pad);
    let base = h * 7.0 / 10.0;
    let crest = h / 5.0;
    let mid = w / 2.0;
    let head = (w * 6.0 / 100.0).max(4.0);

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" "#,
            r#"fill="none" stroke="{stroke}" stroke-width="3" stroke-linecap="round" stroke-linejoin="round">"#,
            r#"<path d="M {x0} {base} Q {mid} {crest} {x1} {base}"/>"#,
            r#"<path d="M {x0} {base} l {head} -{head} M {x0} {base} l {head} {head_half}"/>"#,
            r#"<path d="M {x1} {base} l -{head} -{head} M {x1} {base} l -{head} {head_half}"/>"#,
            "</svg>"
        ),
        w = w,
        h = h,
        stroke = STROKE,
        x0 = x0,
        x1 = x1,
        base = base,
        mid = mid,
        crest = crest,
        head = head,
        head_half = head / 2.0,
    )
}
