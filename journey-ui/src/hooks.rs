use journey_core::VisibilityLatch;
use web_sys::Element;
use yew::prelude::*;

use crate::listeners::ObserverGuard;

/// `true` từ lần đầu phần tử hiển thị đủ `threshold` diện tích, không bao giờ quay lại `false`.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with(node, move |node| {
            let guard = node.cast::<Element>().and_then(|element| {
                let mut latch = VisibilityLatch::new(threshold);
                let visible = visible.clone();
                ObserverGuard::observe(&element, threshold, move |ratio| {
                    let fired = latch.observe(ratio);
                    if fired {
                        visible.set(true);
                    }
                    fired
                })
                .map_err(|err| log::warn!("IntersectionObserver không khởi tạo được: {err:?}"))
                .ok()
            });

            // không có observer: hiện ngay
            if guard.is_none() {
                visible.set(true);
            }

            move || drop(guard)
        });
    }

    *visible
}
