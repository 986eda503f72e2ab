//! CardAnimated: thaw `Card` that fades in on mount.
//!
//! The `card-appear` keyframes live in the app stylesheet. Pass an increasing
//! `delay_ms` to a run of cards to get a staggered reveal.

use leptos::prelude::*;
use thaw::Card;

/// Delay between consecutive cards of a grid, capped so long lists
/// do not wait seconds for their last row.
pub fn stagger_delay(index: usize) -> u32 {
    const STEP_MS: u32 = 30;
    const MAX_MS: u32 = 600;
    (index as u32).saturating_mul(STEP_MS).min(MAX_MS)
}

fn animation_style(delay_ms: u32, style: &str) -> String {
    let animation = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    if style.is_empty() {
        animation
    } else {
        format!("{} {}", animation, style)
    }
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:style=animation_style(delay_ms, &style)>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 90);
        assert_eq!(stagger_delay(150), 600);
    }

    #[test]
    fn test_animation_style() {
        assert_eq!(
            animation_style(60, ""),
            "animation: card-appear 0.28s ease-out 60ms both;"
        );
        assert_eq!(
            animation_style(0, "width: 160px;"),
            "animation: card-appear 0.28s ease-out 0ms both; width: 160px;"
        );
    }
}
