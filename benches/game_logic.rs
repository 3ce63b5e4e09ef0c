use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tile_escape::core::{Level, LevelOptions, NpcController, RawMap, SimpleRng};
use tile_escape::engine::{GameLoop, Hud, InputSource, LevelFrame, LoopConfig, MenuKey, Renderer, Screen};
use tile_escape::term::{FrameBuffer, LevelView, Viewport};
use tile_escape::types::{Direction, HeldKeys, NpcPolicy};

const FOREST: &str = "\
####################
#S   T   WWW    T  #
#  TTT   WWW  K    #
#    T        ---  #
#  K     TT   ---  #
#        TT      K #
#   WWWW           #
#   WWWW    K      #
#                 X#
####################";

struct NullInput;

impl InputSource for NullInput {
    fn poll_quit(&mut self) -> Result<bool> {
        Ok(false)
    }

    fn poll_held(&mut self) -> Result<HeldKeys> {
        Ok(HeldKeys::from_directions(&[Direction::North]))
    }

    fn poll_menu(&mut self) -> Result<Option<MenuKey>> {
        Ok(None)
    }
}

struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_level(&mut self, frame: &LevelFrame<'_>) -> Result<()> {
        black_box(frame.player);
        Ok(())
    }

    fn draw_screen(&mut self, _screen: Screen) -> Result<()> {
        Ok(())
    }
}

fn level() -> Level {
    Level::parse("forest", FOREST, &LevelOptions::default(), &mut SimpleRng::new(1)).unwrap()
}

fn bench_map_parse(c: &mut Criterion) {
    c.bench_function("map_parse", |b| b.iter(|| RawMap::parse(black_box(FOREST)).unwrap()));
}

fn bench_npc_tick(c: &mut Criterion) {
    let mut lvl = level();
    let mut ctl = NpcController::new(NpcPolicy::RandomWalk, SimpleRng::new(7));
    c.bench_function("npc_tick", |b| b.iter(|| lvl.tick_npcs(&mut ctl)));
}

fn bench_frame_step(c: &mut Criterion) {
    let mut lvl = level();
    let mut game = GameLoop::new(
        LoopConfig::default(),
        NpcController::new(NpcPolicy::Patrol, SimpleRng::new(7)),
    );
    let mut session = game.session(&lvl);
    c.bench_function("frame_step_16ms", |b| {
        b.iter(|| {
            // Patrol knights can catch a stationary player; reset when they do.
            if let Ok(Some(_)) = game.step(
                &mut session,
                &mut lvl,
                Hud::default(),
                &mut NullInput,
                &mut NullRenderer,
                black_box(16),
            ) {
                lvl = level();
                session = game.session(&lvl);
            }
        })
    });
}

fn bench_level_render(c: &mut Criterion) {
    let lvl = level();
    let view = LevelView::new();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    c.bench_function("level_render_80x24", |b| {
        b.iter(|| view.render_level_into(&LevelFrame::new(&lvl, Hud::default()), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_map_parse,
    bench_npc_tick,
    bench_frame_step,
    bench_level_render
);
criterion_main!(benches);
