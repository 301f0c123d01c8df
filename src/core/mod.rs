pub mod controller;
pub mod event;
pub mod input;
pub mod input_adapter;

pub use controller::{Controller, Key, MouseButton};
pub use event::{Event, EventDispatcher, EventKind, EventType};
pub use input::InputState;
pub use input_adapter::WinitEventAdapter;
