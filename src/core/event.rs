use std::fmt;

use super::controller::{Key, MouseButton};

/// Discriminant of [`Event`], usable as a dense table index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    WindowResize,
    WindowClose,
    KeyPressed,
    KeyReleased,
    MouseButtonPressed,
    MouseButtonReleased,
    MouseMoved,
}

impl EventKind {
    pub const COUNT: usize = 7;

    pub const ALL: [EventKind; EventKind::COUNT] = [
        EventKind::WindowResize,
        EventKind::WindowClose,
        EventKind::KeyPressed,
        EventKind::KeyReleased,
        EventKind::MouseButtonPressed,
        EventKind::MouseButtonReleased,
        EventKind::MouseMoved,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Window client area changed size (physical pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResize {
    pub width: u32,
    pub height: u32,
}

/// User asked to close the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowClose;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressed {
    pub code: Key,
    /// Generated by key auto-repeat rather than a fresh press
    pub repeated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyReleased {
    pub code: Key,
}

/// Mouse button went down at cursor position `(x, y)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseButtonPressed {
    pub button: MouseButton,
    pub x: f64,
    pub y: f64,
}

/// Mouse button went up at cursor position `(x, y)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseButtonReleased {
    pub button: MouseButton,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMoved {
    pub x: f64,
    pub y: f64,
}

/// Closed set of window/input events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    WindowResize(WindowResize),
    WindowClose(WindowClose),
    KeyPressed(KeyPressed),
    KeyReleased(KeyReleased),
    MouseButtonPressed(MouseButtonPressed),
    MouseButtonReleased(MouseButtonReleased),
    MouseMoved(MouseMoved),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::WindowResize(_) => EventKind::WindowResize,
            Event::WindowClose(_) => EventKind::WindowClose,
            Event::KeyPressed(_) => EventKind::KeyPressed,
            Event::KeyReleased(_) => EventKind::KeyReleased,
            Event::MouseButtonPressed(_) => EventKind::MouseButtonPressed,
            Event::MouseButtonReleased(_) => EventKind::MouseButtonReleased,
            Event::MouseMoved(_) => EventKind::MouseMoved,
        }
    }
}

/// Concrete payload type of one event kind
pub trait EventType: Sized + 'static {
    const KIND: EventKind;

    /// Borrow the payload if `event` is of this kind
    fn narrow(event: &Event) -> Option<&Self>;
}

macro_rules! event_type {
    ($payload:ident) => {
        impl EventType for $payload {
            const KIND: EventKind = EventKind::$payload;

            fn narrow(event: &Event) -> Option<&Self> {
                match event {
                    Event::$payload(payload) => Some(payload),
                    _ => None,
                }
            }
        }

        impl From<$payload> for Event {
            fn from(payload: $payload) -> Self {
                Event::$payload(payload)
            }
        }
    };
}

event_type!(WindowResize);
event_type!(WindowClose);
event_type!(KeyPressed);
event_type!(KeyReleased);
event_type!(MouseButtonPressed);
event_type!(MouseButtonReleased);
event_type!(MouseMoved);

type Handler<C> = Box<dyn FnMut(&Event, &mut C)>;

/// Routes each event to the single handler registered for its kind
///
/// `C` is the state handlers are allowed to mutate; the caller passes it to
/// [`EventDispatcher::dispatch`] so handlers never have to capture it.
pub struct EventDispatcher<C = ()> {
    handlers: [Option<Handler<C>>; EventKind::COUNT],
}

impl<C> EventDispatcher<C> {
    pub fn new() -> Self {
        Self {
            handlers: std::array::from_fn(|_| None),
        }
    }

    /// Register `handler` for events of kind `E`, replacing any previous one
    pub fn add_event_listener<E, F>(&mut self, mut handler: F)
    where
        C: 'static,
        E: EventType,
        F: FnMut(&E, &mut C) + 'static,
    {
        let erased: Handler<C> = Box::new(move |event: &Event, context: &mut C| {
            if let Some(payload) = E::narrow(event) {
                handler(payload, context);
            }
        });
        self.handlers[E::KIND.index()] = Some(erased);
    }

    /// Drop the handler for `E`. Returns whether one was registered.
    pub fn remove_event_listener<E: EventType>(&mut self) -> bool {
        self.handlers[E::KIND.index()].take().is_some()
    }

    pub fn has_listener(&self, kind: EventKind) -> bool {
        self.handlers[kind.index()].is_some()
    }

    /// Invoke the handler for `event`'s kind, if any
    pub fn dispatch(&mut self, event: &Event, context: &mut C) {
        match &mut self.handlers[event.kind().index()] {
            Some(handler) => handler(event, context),
            None => log::trace!("no listener for {:?}", event.kind()),
        }
    }
}

impl<C> Default for EventDispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for EventDispatcher<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<EventKind> = EventKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.has_listener(*kind))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("registered", &registered)
            .finish()
    }
}
