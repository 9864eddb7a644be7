//! The stage: frame driver and owner of registered systems

use crate::clock::FrameClock;
use crate::event::InputEvent;
use crate::event_bus::EventBus;
use crate::input::PointerState;
use crate::system::{FrameContext, StageSystem};
use std::time::{Duration, Instant};
use wisp_core::Vec2;
use wisp_render::{Bounds, Canvas};

/// Owns the registered systems and runs the update-then-draw tick.
///
/// Input handlers push [`InputEvent`]s between ticks; the next tick drains
/// and applies them before any system updates, so systems only ever see
/// parameter changes at a frame boundary.
pub struct Stage {
    width: u32,
    height: u32,
    systems: Vec<Box<dyn StageSystem>>,
    events: EventBus,
    pointer: PointerState,
    clock: FrameClock,
}

impl Stage {
    /// Create a stage for a surface of the given size. The pointer starts
    /// at the surface center.
    pub fn new(width: u32, height: u32) -> Self {
        let center = Bounds::from_size(width as f64, height as f64).center();
        Self {
            width,
            height,
            systems: Vec::new(),
            events: EventBus::new(),
            pointer: PointerState::new(center),
            clock: FrameClock::new(),
        }
    }

    /// Register a system. Systems update and draw in registration order.
    pub fn register_system(&mut self, system: Box<dyn StageSystem>) {
        self.systems.push(system);
    }

    /// Queue an input event for the next tick
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Current surface bounds as advertised by the host
    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width as f64, self.height as f64)
    }

    /// Latest pointer position
    pub fn pointer(&self) -> Vec2 {
        self.pointer.position()
    }

    /// Number of completed ticks
    pub fn frame(&self) -> u64 {
        self.clock.frame
    }

    /// Total elapsed time in seconds
    pub fn elapsed(&self) -> f64 {
        self.clock.total_time
    }

    /// Registered systems, in registration order
    pub fn systems(&self) -> impl Iterator<Item = &dyn StageSystem> {
        self.systems.iter().map(|s| s.as_ref())
    }

    /// Total live entities across all systems
    pub fn total_population(&self) -> usize {
        self.systems.iter().map(|s| s.population()).sum()
    }

    /// Index of the system currently bound to input, if any.
    /// Only the first controllable registration is honored.
    fn controllable_index(&self) -> Option<usize> {
        self.systems.iter().position(|s| s.controllable())
    }

    fn apply_events(&mut self) {
        let controllable = self.controllable_index();
        for event in self.events.drain() {
            match event {
                InputEvent::PointerMoved { x, y } => {
                    self.pointer.process_move(x, y);
                }
                InputEvent::Wheel { delta, modifiers } => {
                    if let Some(i) = controllable {
                        self.systems[i].apply_wheel(delta, modifiers);
                    }
                }
                InputEvent::Resized { width, height } => {
                    self.width = width;
                    self.height = height;
                }
            }
        }
    }

    /// Run one tick: apply queued input, update every system in order, then
    /// clear the surface and draw every system in order.
    pub fn tick(&mut self, canvas: &mut dyn Canvas) {
        self.clock.tick();
        self.apply_events();

        if let Some(i) = self.controllable_index() {
            let origin = self.pointer.position();
            self.systems[i].set_origin(origin);
        }

        let ctx = FrameContext {
            bounds: self.bounds(),
        };
        for system in &mut self.systems {
            system.update(&ctx);
        }

        canvas.clear();
        canvas.set_global_alpha(1.0);
        for system in &self.systems {
            system.draw(canvas);
        }
    }

    fn paced_tick(&mut self, canvas: &mut dyn Canvas, realtime: bool) {
        let budget = Duration::from_secs_f64(self.clock.frame_interval);
        let started = Instant::now();
        self.tick(canvas);
        if realtime {
            let used = started.elapsed();
            if used < budget {
                std::thread::sleep(budget - used);
            }
        }
    }

    /// Run `frames` consecutive ticks. With `realtime` set, each tick is
    /// paced to the clock's frame budget by sleeping off the unused
    /// remainder; otherwise ticks run back to back.
    pub fn run_frames(&mut self, canvas: &mut dyn Canvas, frames: u64, realtime: bool) {
        for _ in 0..frames {
            self.paced_tick(canvas, realtime);
        }
    }

    /// Run forever at the frame budget. There is no stop state; the loop
    /// ends only with the hosting process.
    pub fn run(&mut self, canvas: &mut dyn Canvas) -> ! {
        loop {
            self.paced_tick(canvas, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::WheelModifiers;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wisp_render::SoftCanvas;

    #[derive(Default)]
    struct ProbeLog {
        updates: usize,
        draws: usize,
        origins: Vec<Vec2>,
        wheels: Vec<(f64, WheelModifiers)>,
        seen_bounds: Vec<Bounds>,
    }

    /// Records the calls the stage makes through a handle the test keeps
    struct Probe {
        controllable: bool,
        log: Rc<RefCell<ProbeLog>>,
    }

    fn probe(controllable: bool) -> (Box<Probe>, Rc<RefCell<ProbeLog>>) {
        let log = Rc::new(RefCell::new(ProbeLog::default()));
        (
            Box::new(Probe {
                controllable,
                log: log.clone(),
            }),
            log,
        )
    }

    impl StageSystem for Probe {
        fn update(&mut self, ctx: &FrameContext) {
            let mut log = self.log.borrow_mut();
            log.updates += 1;
            log.seen_bounds.push(ctx.bounds);
        }

        fn draw(&self, _canvas: &mut dyn Canvas) {
            self.log.borrow_mut().draws += 1;
        }

        fn name(&self) -> &str {
            "probe"
        }

        fn controllable(&self) -> bool {
            self.controllable
        }

        fn set_origin(&mut self, origin: Vec2) {
            self.log.borrow_mut().origins.push(origin);
        }

        fn apply_wheel(&mut self, delta: f64, modifiers: WheelModifiers) {
            self.log.borrow_mut().wheels.push((delta, modifiers));
        }
    }

    #[test]
    fn tick_updates_then_draws_every_system() {
        let mut stage = Stage::new(640, 480);
        let (a, log_a) = probe(false);
        let (b, log_b) = probe(false);
        stage.register_system(a);
        stage.register_system(b);

        let mut canvas = SoftCanvas::new(640, 480);
        stage.tick(&mut canvas);
        stage.tick(&mut canvas);

        for log in [&log_a, &log_b] {
            assert_eq!(log.borrow().updates, 2);
            assert_eq!(log.borrow().draws, 2);
        }
        assert_eq!(stage.frame(), 2);
    }

    #[test]
    fn pointer_events_steer_only_the_controllable_system() {
        let mut stage = Stage::new(640, 480);
        let (plain, log_plain) = probe(false);
        let (bound, log_bound) = probe(true);
        stage.register_system(plain);
        stage.register_system(bound);

        stage.push_event(InputEvent::PointerMoved { x: 100.0, y: 50.0 });
        let mut canvas = SoftCanvas::new(640, 480);
        stage.tick(&mut canvas);

        assert!(log_plain.borrow().origins.is_empty());
        assert_eq!(log_bound.borrow().origins, vec![Vec2::new(100.0, 50.0)]);
    }

    #[test]
    fn controllable_origin_defaults_to_surface_center() {
        let mut stage = Stage::new(640, 480);
        let (bound, log) = probe(true);
        stage.register_system(bound);

        let mut canvas = SoftCanvas::new(640, 480);
        stage.tick(&mut canvas);

        assert_eq!(log.borrow().origins, vec![Vec2::new(320.0, 240.0)]);
    }

    #[test]
    fn wheel_events_route_in_arrival_order() {
        let mut stage = Stage::new(640, 480);
        let (bound, log) = probe(true);
        stage.register_system(bound);

        stage.push_event(InputEvent::Wheel {
            delta: 100.0,
            modifiers: WheelModifiers::SHIFT,
        });
        stage.push_event(InputEvent::Wheel {
            delta: -50.0,
            modifiers: WheelModifiers::NONE,
        });

        let mut canvas = SoftCanvas::new(640, 480);
        stage.tick(&mut canvas);

        let log = log.borrow();
        assert_eq!(log.wheels.len(), 2);
        assert_eq!(log.wheels[0], (100.0, WheelModifiers::SHIFT));
        assert_eq!(log.wheels[1], (-50.0, WheelModifiers::NONE));
    }

    #[test]
    fn only_first_controllable_system_is_bound() {
        let mut stage = Stage::new(640, 480);
        let (first, log_first) = probe(true);
        let (second, log_second) = probe(true);
        stage.register_system(first);
        stage.register_system(second);

        stage.push_event(InputEvent::Wheel {
            delta: 10.0,
            modifiers: WheelModifiers::NONE,
        });
        let mut canvas = SoftCanvas::new(640, 480);
        stage.tick(&mut canvas);

        assert_eq!(log_first.borrow().wheels.len(), 1);
        assert!(log_second.borrow().wheels.is_empty());
        assert!(log_second.borrow().origins.is_empty());
    }

    #[test]
    fn resize_updates_the_bounds_systems_see() {
        let mut stage = Stage::new(640, 480);
        let (sys, log) = probe(false);
        stage.register_system(sys);

        let mut canvas = SoftCanvas::new(640, 480);
        stage.tick(&mut canvas);
        stage.push_event(InputEvent::Resized {
            width: 800,
            height: 600,
        });
        stage.tick(&mut canvas);

        let log = log.borrow();
        assert_eq!(log.seen_bounds[0].max, Vec2::new(640.0, 480.0));
        assert_eq!(log.seen_bounds[1].max, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn run_frames_ticks_the_requested_count() {
        let mut stage = Stage::new(64, 64);
        let (sys, log) = probe(false);
        stage.register_system(sys);

        let mut canvas = SoftCanvas::new(64, 64);
        stage.run_frames(&mut canvas, 5, false);
        assert_eq!(stage.frame(), 5);
        assert_eq!(log.borrow().updates, 5);
    }
}
