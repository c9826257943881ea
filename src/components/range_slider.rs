use crate::model::{RangeValue, Selection, SelectionAction, SliderConfig};
use crate::state::{
    DocumentListeners, DragController, DragSession, Handle, Span, TrackGeometry,
};
use crate::util::pointer_client_x;
use log::debug;
use std::rc::Rc;
use web_sys::{Event, HtmlElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RangeSliderProps {
    pub config: SliderConfig,
    /// Receives the selection in domain units whenever it changes.
    #[prop_or_default]
    pub on_change: Option<Callback<RangeValue>>,
}

pub fn fill_style(sel: Selection) -> String {
    format!("left: {}%; width: {}%;", sel.min(), sel.span())
}

pub fn thumb_style(percent: u32) -> String {
    format!("left: {percent}%;")
}

/// Reads the rendered layout of the track and its children. `None` until all
/// four elements are mounted.
fn measure(
    background: &NodeRef,
    body: &NodeRef,
    left_thumb: &NodeRef,
    right_thumb: &NodeRef,
) -> Option<TrackGeometry> {
    let bg = background.cast::<HtmlElement>()?;
    let origin = bg.get_bounding_client_rect().left();
    let span = |node: &NodeRef| {
        node.cast::<HtmlElement>().map(|el| Span {
            start: el.get_bounding_client_rect().left() - origin,
            width: el.offset_width() as f64,
        })
    };
    Some(TrackGeometry {
        origin,
        width: bg.offset_width() as f64,
        left_thumb: span(left_thumb)?,
        right_thumb: span(right_thumb)?,
        body: span(body)?,
    })
}

#[function_component(RangeSlider)]
pub fn range_slider(props: &RangeSliderProps) -> Html {
    let domain = props.config.domain();
    let initial = props.config.initial_selection();
    let selection = use_reducer(move || initial);
    let background_ref = use_node_ref();
    let body_ref = use_node_ref();
    let left_ref = use_node_ref();
    let right_ref = use_node_ref();
    let controller = use_mut_ref(DragController::<DocumentListeners>::new);

    // A new config restarts from its initial selection; a no-op on mount
    {
        let dispatcher = selection.dispatcher();
        let controller = controller.clone();
        use_effect_with(props.config, move |config| {
            if controller.borrow_mut().end().is_some() {
                debug!("drag cancelled by config change");
            }
            dispatcher.dispatch(SelectionAction::Reset(config.initial_selection()));
            || ()
        });
    }

    {
        let on_change = props.on_change.clone();
        use_effect_with(*selection, move |sel| {
            if let Some(cb) = on_change {
                cb.emit(domain.value_of(*sel));
            }
            || ()
        });
    }

    // Unmounting mid-drag must still release the document listeners
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            move || {
                if controller.borrow_mut().end().is_some() {
                    debug!("drag released on unmount");
                }
            }
        });
    }

    let begin: Rc<dyn Fn(Handle, Event)> = {
        let controller = controller.clone();
        let dispatcher = selection.dispatcher();
        let refs = (
            background_ref.clone(),
            body_ref.clone(),
            left_ref.clone(),
            right_ref.clone(),
        );
        Rc::new(move |handle: Handle, event: Event| {
            event.prevent_default();
            let Some(pointer_x) = pointer_client_x(&event) else {
                debug!("{} without a position; ignoring", event.type_());
                return;
            };
            let (bg, body, left, right) = &refs;
            let Some(session) = measure(bg, body, left, right)
                .and_then(|geometry| DragSession::begin(handle, pointer_x, geometry))
            else {
                debug!("track not laid out; ignoring drag on {handle:?}");
                return;
            };
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let on_move = {
                let controller = Rc::downgrade(&controller);
                let dispatcher = dispatcher.clone();
                move |e: &Event| {
                    let Some(controller) = controller.upgrade() else {
                        return;
                    };
                    let Some(x) = pointer_client_x(e) else {
                        debug!("{} without a position; ignoring", e.type_());
                        return;
                    };
                    e.prevent_default();
                    let action = controller.borrow().on_move(x);
                    if let Some(action) = action {
                        dispatcher.dispatch(action);
                    }
                }
            };
            let on_end = {
                let controller = Rc::downgrade(&controller);
                move |_e: &Event| {
                    let Some(controller) = controller.upgrade() else {
                        return;
                    };
                    let ended = controller.borrow_mut().end();
                    if ended.is_some() {
                        debug!("drag ended");
                    }
                }
            };

            if let Some(prev) = controller.borrow().active_handle() {
                debug!("drag on {prev:?} never ended; replacing it");
            }
            let listeners = DocumentListeners::attach(&document, on_move, on_end);
            drop(controller.borrow_mut().begin(session, listeners));
            debug!("drag started on {handle:?}");
        })
    };

    let mouse_down = |handle: Handle| {
        let begin = begin.clone();
        Callback::from(move |e: MouseEvent| {
            if e.button() == 0 {
                begin(handle, e.into());
            }
        })
    };
    let touch_start = |handle: Handle| {
        let begin = begin.clone();
        Callback::from(move |e: TouchEvent| begin(handle, e.into()))
    };

    let sel = *selection;
    html! {
        <div class="range">
            <span class="range__label range__label--min">{ domain.min.to_string() }</span>
            <div class="range__track-background" ref={background_ref}>
                <div
                    class="range__track"
                    ref={body_ref}
                    draggable="false"
                    style={fill_style(sel)}
                    onmousedown={mouse_down(Handle::Track)}
                    ontouchstart={touch_start(Handle::Track)}
                ></div>
                <span
                    class="range__thumb"
                    ref={left_ref}
                    draggable="false"
                    style={thumb_style(sel.min())}
                    onmousedown={mouse_down(Handle::Left)}
                    ontouchstart={touch_start(Handle::Left)}
                >
                    <span class="range__thumb-label">{ domain.label(sel.min()).to_string() }</span>
                </span>
                <span
                    class="range__thumb range__thumb--max"
                    ref={right_ref}
                    draggable="false"
                    style={thumb_style(sel.max())}
                    onmousedown={mouse_down(Handle::Right)}
                    ontouchstart={touch_start(Handle::Right)}
                >
                    <span class="range__thumb-label">{ domain.label(sel.max()).to_string() }</span>
                </span>
            </div>
            <span class="range__label range__label--max">{ domain.max.to_string() }</span>
        </div>
    }
}
