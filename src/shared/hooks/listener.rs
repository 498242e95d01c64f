//! RAII wrapper around a `window` DOM event listener.
//!
//! Dropping the wrapper removes the listener, so a hook that stores one via
//! `use_hook` gets acquire-on-mount / release-on-unmount for free.

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    pub struct WindowListener {
        event: &'static str,
        callback: Closure<dyn FnMut()>,
    }

    impl WindowListener {
        pub fn attach(event: &'static str, handler: impl FnMut() + 'static) -> Self {
            let callback = Closure::<dyn FnMut()>::new(handler);
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            }
            Self { event, callback }
        }
    }

    impl Drop for WindowListener {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    /// No DOM outside the browser; keeps hook code compiling in native tests.
    pub struct WindowListener;

    impl WindowListener {
        pub fn attach(_event: &'static str, _handler: impl FnMut() + 'static) -> Self {
            Self
        }
    }
}

pub use imp::WindowListener;
