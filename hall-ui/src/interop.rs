use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{EventTarget, MediaStream, MediaStreamConstraints, MediaStreamTrack};

/// Current viewport width, falling back to the root element's client width.
pub fn viewport_width() -> Option<u32> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    if width > 0.0 {
        return Some(width.round() as u32);
    }

    let root = window.document()?.document_element()?;
    Some(root.client_width().max(0) as u32)
}

pub fn copy_text_to_clipboard(text: &str) {
    let Ok(payload) = serde_json::to_string(text) else {
        return;
    };
    let js = format!(
        "if (navigator && navigator.clipboard) {{ navigator.clipboard.writeText({payload}); }}"
    );
    let _ = js_sys::eval(&js);
}

/// Scroll a scrollable element to its end.
pub fn scroll_to_bottom(element_id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    else {
        return;
    };
    element.set_scroll_top(element.scroll_height());
}

pub fn window_target() -> Option<EventTarget> {
    web_sys::window().map(Into::into)
}

pub fn document_target() -> Option<EventTarget> {
    web_sys::window()
        .and_then(|w| w.document())
        .map(Into::into)
}

/// An event listener that is removed when the guard drops.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerGuard {
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::error!("failed to add {event} listener: {e:?}");
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Err(e) = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        ) {
            log::warn!("failed to remove {} listener: {e:?}", self.event);
        }
    }
}

#[derive(Debug, Error)]
pub enum MicrophoneError {
    #[error("media devices are not available")]
    Unsupported,
    #[error("microphone request failed: {0}")]
    Denied(String),
}

/// Ask for an audio-only capture stream.
pub async fn request_microphone() -> Result<MediaStream, MicrophoneError> {
    let devices = web_sys::window()
        .ok_or(MicrophoneError::Unsupported)?
        .navigator()
        .media_devices()
        .map_err(|_| MicrophoneError::Unsupported)?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| MicrophoneError::Denied(format!("{e:?}")))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| MicrophoneError::Denied(format!("{e:?}")))?;

    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| MicrophoneError::Denied("not a media stream".to_string()))
}

pub fn stop_media_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}
