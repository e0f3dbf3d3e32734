//! Fade and slide transitions driven by `requestAnimationFrame`.
//!
//! Each transition resolves to the [`AnimationOutcome`] of the underlying
//! [`animate`] loop. On completion the inline properties used while animating
//! are cleared; a cancelled transition leaves the element mid-way.

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CssStyleDeclaration, Element, Performance, Window};

use super::{Result, as_html, get_style, hide, show, window};
use crate::animation::{AnimationOptions, AnimationOutcome, FrameClock, animate, lerp};

/// Frame clock over `window.requestAnimationFrame`.
#[derive(Debug, Clone)]
pub struct RafClock {
    window: Window,
    performance: Option<Performance>,
}

impl RafClock {
    pub fn new() -> Result<Self> {
        let window = window()?;
        let performance = window.performance();
        Ok(Self { window, performance })
    }
}

impl FrameClock for RafClock {
    fn now(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }

    /// Resolves with the frame timestamp. When no frame can be requested the
    /// timestamp is infinite, which completes the animation at once.
    async fn next_frame(&self) -> f64 {
        let (tx, rx) = oneshot::channel::<f64>();
        let callback = Closure::once_into_js(move |timestamp: f64| {
            let _ = tx.send(timestamp);
        });

        if let Err(_e) = self.window.request_animation_frame(callback.unchecked_ref()) {
            #[cfg(feature = "tracing")]
            tracing::warn!("requestAnimationFrame failed: {:?}", _e);
            return f64::INFINITY;
        }
        rx.await.unwrap_or(f64::INFINITY)
    }
}

async fn run(
    style: &CssStyleDeclaration,
    property: &str,
    from: f64,
    to: f64,
    unit: &str,
    options: &AnimationOptions,
    token: Option<&CancellationToken>,
) -> Result<AnimationOutcome> {
    let clock = RafClock::new()?;
    let outcome = animate(&clock, options, token, |t| {
        let value = frame_value(from, to, t, unit);
        if let Err(_e) = style.set_property(property, &value) {
            #[cfg(feature = "tracing")]
            tracing::debug!("setting {} to {} failed: {:?}", property, value, _e);
        }
    })
    .await;
    Ok(outcome)
}

/// CSS value for eased progress `t` between `from` and `to`.
fn frame_value(from: f64, to: f64, t: f64, unit: &str) -> String {
    format!("{}{}", lerp(from, to, t), unit)
}

fn current_opacity(el: &Element) -> f64 {
    get_style(el, "opacity")
        .and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(1.0)
}

/// Shows `el` and raises its opacity from 0 to 1.
pub async fn fade_in(
    el: &Element,
    options: &AnimationOptions,
    token: Option<&CancellationToken>,
) -> Result<AnimationOutcome> {
    let style = as_html(el)?.style();
    style.set_property("opacity", "0")?;
    show(el)?;

    let outcome = run(&style, "opacity", 0.0, 1.0, "", options, token).await?;
    if outcome == AnimationOutcome::Completed {
        style.remove_property("opacity")?;
    }
    Ok(outcome)
}

/// Lowers the opacity of `el` to 0, then hides it.
pub async fn fade_out(
    el: &Element,
    options: &AnimationOptions,
    token: Option<&CancellationToken>,
) -> Result<AnimationOutcome> {
    let style = as_html(el)?.style();
    let from = current_opacity(el);

    let outcome = run(&style, "opacity", from, 0.0, "", options, token).await?;
    if outcome == AnimationOutcome::Completed {
        hide(el)?;
        style.remove_property("opacity")?;
    }
    Ok(outcome)
}

/// Shows `el` and grows its height from 0 to its content height.
pub async fn slide_down(
    el: &Element,
    options: &AnimationOptions,
    token: Option<&CancellationToken>,
) -> Result<AnimationOutcome> {
    let style = as_html(el)?.style();
    show(el)?;
    let target = f64::from(el.scroll_height());
    style.set_property("overflow", "hidden")?;
    style.set_property("height", "0px")?;

    let outcome = run(&style, "height", 0.0, target, "px", options, token).await?;
    if outcome == AnimationOutcome::Completed {
        style.remove_property("height")?;
        style.remove_property("overflow")?;
    }
    Ok(outcome)
}

/// Shrinks the height of `el` to 0, then hides it.
pub async fn slide_up(
    el: &Element,
    options: &AnimationOptions,
    token: Option<&CancellationToken>,
) -> Result<AnimationOutcome> {
    let html = as_html(el)?;
    let style = html.style();
    let from = f64::from(html.offset_height());
    style.set_property("overflow", "hidden")?;

    let outcome = run(&style, "height", from, 0.0, "px", options, token).await?;
    if outcome == AnimationOutcome::Completed {
        hide(el)?;
        style.remove_property("height")?;
        style.remove_property("overflow")?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_value() {
        assert_eq!(frame_value(0.0, 1.0, 0.0, ""), "0");
        assert_eq!(frame_value(0.0, 1.0, 0.5, ""), "0.5");
        assert_eq!(frame_value(0.0, 120.0, 0.25, "px"), "30px");
        assert_eq!(frame_value(80.0, 0.0, 1.0, "px"), "0px");
    }
}
