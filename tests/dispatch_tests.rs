use game_shell::core::event::{
    Event, EventDispatcher, EventKind, KeyPressed, KeyReleased, MouseButtonPressed,
    MouseButtonReleased, MouseMoved, WindowClose, WindowResize,
};
use game_shell::core::{InputState, Key, MouseButton};

#[derive(Debug, Default)]
struct Context {
    input: InputState,
    closed: bool,
    size: Option<(u32, u32)>,
    hits: Vec<&'static str>,
}

fn all_events() -> Vec<Event> {
    vec![
        WindowResize { width: 10, height: 20 }.into(),
        WindowClose.into(),
        KeyPressed {
            code: Key::W,
            repeated: false,
        }
        .into(),
        KeyReleased { code: Key::W }.into(),
        MouseButtonPressed {
            button: MouseButton::Left,
            x: 1.0,
            y: 2.0,
        }
        .into(),
        MouseButtonReleased {
            button: MouseButton::Left,
            x: 1.0,
            y: 2.0,
        }
        .into(),
        MouseMoved { x: 3.0, y: 4.0 }.into(),
    ]
}

#[cfg(test)]
mod dispatcher_tests {
    use super::*;

    #[test]
    fn test_every_kind_is_covered() {
        let kinds: Vec<EventKind> = all_events().iter().map(Event::kind).collect();
        assert_eq!(kinds, EventKind::ALL.to_vec());
    }

    #[test]
    fn test_most_recent_listener_wins() {
        let mut dispatcher = EventDispatcher::<Context>::new();
        let labels = ["one", "two", "three"];
        for label in labels {
            dispatcher.add_event_listener(move |_: &KeyPressed, ctx: &mut Context| ctx.hits.push(label));
        }

        let mut ctx = Context::default();
        let event: Event = KeyPressed {
            code: Key::A,
            repeated: false,
        }
        .into();
        dispatcher.dispatch(&event, &mut ctx);
        dispatcher.dispatch(&event, &mut ctx);

        assert_eq!(ctx.hits, vec!["three", "three"]);
    }

    #[test]
    fn test_empty_dispatcher_changes_nothing() {
        let mut dispatcher = EventDispatcher::<Context>::new();
        let mut ctx = Context::default();

        for event in all_events() {
            dispatcher.dispatch(&event, &mut ctx);
        }

        assert!(ctx.hits.is_empty());
        assert!(!ctx.closed);
        assert!(ctx.size.is_none());
        assert_eq!(ctx.input.pressed_keys().count(), 0);
    }

    #[test]
    fn test_each_event_reaches_only_its_listener() {
        let mut dispatcher = EventDispatcher::<Context>::new();
        dispatcher.add_event_listener(|_: &WindowResize, ctx: &mut Context| ctx.hits.push("resize"));
        dispatcher.add_event_listener(|_: &WindowClose, ctx: &mut Context| ctx.hits.push("close"));
        dispatcher.add_event_listener(|_: &KeyPressed, ctx: &mut Context| ctx.hits.push("key down"));
        dispatcher.add_event_listener(|_: &KeyReleased, ctx: &mut Context| ctx.hits.push("key up"));
        dispatcher
            .add_event_listener(|_: &MouseButtonPressed, ctx: &mut Context| ctx.hits.push("button down"));
        dispatcher
            .add_event_listener(|_: &MouseButtonReleased, ctx: &mut Context| ctx.hits.push("button up"));
        dispatcher.add_event_listener(|_: &MouseMoved, ctx: &mut Context| ctx.hits.push("moved"));

        let mut ctx = Context::default();
        for event in all_events() {
            dispatcher.dispatch(&event, &mut ctx);
        }

        assert_eq!(
            ctx.hits,
            vec!["resize", "close", "key down", "key up", "button down", "button up", "moved"]
        );
    }

    #[test]
    fn test_dispatch_leaves_event_untouched() {
        let mut dispatcher = EventDispatcher::<Context>::new();
        dispatcher.add_event_listener(|event: &MouseMoved, ctx: &mut Context| {
            ctx.input.set_cursor_position(event.x, event.y);
        });

        let event: Event = MouseMoved { x: 7.0, y: 8.0 }.into();
        let copy = event;
        let mut ctx = Context::default();
        dispatcher.dispatch(&event, &mut ctx);

        assert_eq!(event, copy);
        assert_eq!(ctx.input.cursor_position(), (7.0, 8.0));
    }
}

#[cfg(test)]
mod input_through_dispatch_tests {
    use super::*;

    fn input_dispatcher() -> EventDispatcher<Context> {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_event_listener(|e: &KeyPressed, ctx: &mut Context| ctx.input.press_key(e.code));
        dispatcher.add_event_listener(|e: &KeyReleased, ctx: &mut Context| ctx.input.release_key(e.code));
        dispatcher.add_event_listener(|e: &MouseButtonPressed, ctx: &mut Context| {
            ctx.input.press_mouse_button(e.button)
        });
        dispatcher.add_event_listener(|e: &MouseButtonReleased, ctx: &mut Context| {
            ctx.input.release_mouse_button(e.button)
        });
        dispatcher.add_event_listener(|_: &WindowClose, ctx: &mut Context| ctx.closed = true);
        dispatcher.add_event_listener(|e: &WindowResize, ctx: &mut Context| {
            ctx.size = Some((e.width, e.height))
        });
        dispatcher
    }

    #[test]
    fn test_press_release_cycle_for_every_key() {
        let mut dispatcher = input_dispatcher();
        let mut ctx = Context::default();

        for key in Key::ALL {
            assert!(!ctx.input.is_key_pressed(key));
            dispatcher.dispatch(
                &KeyPressed {
                    code: key,
                    repeated: false,
                }
                .into(),
                &mut ctx,
            );
            assert!(ctx.input.is_key_pressed(key));
            dispatcher.dispatch(&KeyReleased { code: key }.into(), &mut ctx);
            assert!(!ctx.input.is_key_pressed(key));
        }
    }

    #[test]
    fn test_repeat_press_is_idempotent() {
        let mut dispatcher = input_dispatcher();
        let mut ctx = Context::default();

        dispatcher.dispatch(
            &KeyPressed {
                code: Key::D,
                repeated: false,
            }
            .into(),
            &mut ctx,
        );
        dispatcher.dispatch(
            &KeyPressed {
                code: Key::D,
                repeated: true,
            }
            .into(),
            &mut ctx,
        );
        assert!(ctx.input.is_key_pressed(Key::D));

        dispatcher.dispatch(&KeyReleased { code: Key::D }.into(), &mut ctx);
        assert!(!ctx.input.is_key_pressed(Key::D));
    }

    #[test]
    fn test_mouse_buttons_and_window_events() {
        let mut dispatcher = input_dispatcher();
        let mut ctx = Context::default();

        dispatcher.dispatch(
            &MouseButtonPressed {
                button: MouseButton::Middle,
                x: 0.0,
                y: 0.0,
            }
            .into(),
            &mut ctx,
        );
        assert!(ctx.input.is_mouse_button_pressed(MouseButton::Middle));

        dispatcher.dispatch(&WindowResize { width: 800, height: 600 }.into(), &mut ctx);
        dispatcher.dispatch(&WindowClose.into(), &mut ctx);

        assert_eq!(ctx.size, Some((800, 600)));
        assert!(ctx.closed);
    }
}
