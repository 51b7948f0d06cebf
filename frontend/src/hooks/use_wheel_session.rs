use std::cell::RefCell;
use std::rc::Rc;
use wheel_shared::{load_spin_count, WheelSession};
use yew::prelude::*;

use crate::config::{wheel_config, wheel_segments};
use crate::storage::LocalStorageStore;

/// The wheel session and the store its counter is persisted to.
///
/// Both live for the component's lifetime; the counter is read from
/// `localStorage` once, on first render.
#[hook]
pub fn use_wheel_session() -> (Rc<RefCell<WheelSession>>, Rc<RefCell<LocalStorageStore>>) {
    let store = use_mut_ref(LocalStorageStore::new);
    let session = {
        let store = store.clone();
        use_mut_ref(move || {
            let spin_count = load_spin_count(&*store.borrow());
            log::debug!("Loaded spin count {}", spin_count);
            WheelSession::new(wheel_segments(), wheel_config(), spin_count)
        })
    };
    (session, store)
}
