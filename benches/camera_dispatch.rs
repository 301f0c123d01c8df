use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use game_shell::camera::{Camera, ProjectionMode};
use game_shell::core::event::{Event, EventDispatcher, KeyPressed, KeyReleased, MouseMoved};
use game_shell::core::{InputState, Key};
use glam::Vec3;

/// Benchmark: View matrix read with nothing changed (cache hit)
fn bench_view_matrix_clean(c: &mut Criterion) {
    let mut camera = Camera::new(
        Vec3::new(-5.0, 0.0, 0.0),
        Vec3::new(0.0, 15.0, 30.0),
        ProjectionMode::Perspective,
    );

    c.bench_function("view_matrix_clean", |b| {
        b.iter(|| black_box(camera.view_matrix()))
    });
}

/// Benchmark: Mutate then read, forcing a basis + look-at rebuild every time
fn bench_view_matrix_dirty(c: &mut Criterion) {
    let mut camera = Camera::default();

    c.bench_function("view_matrix_dirty", |b| {
        b.iter(|| {
            camera.add_movement_and_rotation(
                black_box(Vec3::new(0.01, 0.0, 0.0)),
                black_box(Vec3::new(0.0, 0.1, 0.2)),
            );
            black_box(camera.view_matrix())
        })
    });
}

/// Benchmark: Dispatching batches of mixed input events
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    let mut dispatcher = EventDispatcher::<InputState>::new();
    dispatcher.add_event_listener(|e: &KeyPressed, input: &mut InputState| input.press_key(e.code));
    dispatcher.add_event_listener(|e: &KeyReleased, input: &mut InputState| input.release_key(e.code));
    dispatcher.add_event_listener(|e: &MouseMoved, input: &mut InputState| {
        input.set_cursor_position(e.x, e.y)
    });

    for count in [16, 256, 4096].iter() {
        let events: Vec<Event> = (0..*count)
            .map(|i| {
                let key = Key::ALL[i % Key::COUNT];
                match i % 3 {
                    0 => KeyPressed {
                        code: key,
                        repeated: false,
                    }
                    .into(),
                    1 => KeyReleased { code: key }.into(),
                    _ => MouseMoved {
                        x: i as f64,
                        y: i as f64 * 0.5,
                    }
                    .into(),
                }
            })
            .collect();

        let mut input = InputState::new();
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| {
                for event in events {
                    dispatcher.dispatch(black_box(event), &mut input);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_view_matrix_clean,
    bench_view_matrix_dirty,
    bench_dispatch,
);

criterion_main!(benches);
