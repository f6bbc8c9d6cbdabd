//! Debounced value hook.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::debounce::TrailingDebounce;


/// Trailing-edge debounce: tracks `value` and re-emits it only after
/// `delay_ms` of quiet. Each change supersedes the pending one, so a burst
/// of rapid changes produces a single downstream emission carrying the
/// final value.
pub fn use_debounced_value<T>(value: ReadSignal<T>, delay_ms: u32) -> ReadSignal<T>
where
    T: Clone + PartialEq + 'static,
{
    let mut debounced = use_signal(|| value.peek().clone());
    let mut debounce = use_signal(|| TrailingDebounce::<T>::new());

    use_effect(move || {
        let next = value.read().clone();
        if next == *debounced.peek() {
            // back at the settled value: a still-pending ticket must not
            // fire later and resurrect the superseded value
            debounce.write().cancel();
            return;
        }
        let ticket = debounce.write().submit(next);
        spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            // a newer change makes this ticket stale and the take a no-op
            if let Some(settled) = debounce.write().take_if_current(ticket) {
                debounced.set(settled);
            }
        });
    });

    debounced.into()
}
