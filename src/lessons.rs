// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

//! The tutorial programs. Each one is a Model + Render pair run by Game,
//! differing from the others in a single feature.

pub mod color_cycle;
pub mod color_modulation;
pub mod events;
pub mod key_presses;
pub mod rotation;
pub mod sprite_sheet;
pub mod true_type;

use crate::{
    context::Context,
    game::{Game, Model, Render, RunOutcome},
};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lesson {
    /// show one image until the window closes
    Events,
    /// arrow keys pick one of five images
    KeyPresses,
    /// four clips of a sprite sheet in the screen corners
    SpriteSheet,
    /// q/w/e and a/s/d tint a texture
    ColorModulation,
    /// wall-clock timed hue cycle
    ColorCycle,
    /// a/d rotate, q/w/e flip
    Rotation,
    /// a line of text rendered from a ttf font
    TrueType,
}

impl Lesson {
    /// Runs the lesson to completion and hands the context back
    pub fn run(self, ctx: Context) -> (RunOutcome, Context) {
        match self {
            Lesson::Events => run_game(events::EventsModel::new(), events::EventsRender::new(), ctx),
            Lesson::KeyPresses => run_game(
                key_presses::KeyPressesModel::new(),
                key_presses::KeyPressesRender::new(),
                ctx,
            ),
            Lesson::SpriteSheet => run_game(
                sprite_sheet::SpriteSheetModel::new(),
                sprite_sheet::SpriteSheetRender::new(),
                ctx,
            ),
            Lesson::ColorModulation => run_game(
                color_modulation::ColorModulationModel::new(),
                color_modulation::ColorModulationRender::new(),
                ctx,
            ),
            Lesson::ColorCycle => {
                let m = color_cycle::ColorCycleModel::new(
                    ctx.config.ticks_per_second,
                    ctx.config.tick_increment,
                );
                run_game(m, color_cycle::ColorCycleRender::new(), ctx)
            }
            Lesson::Rotation => run_game(
                rotation::RotationModel::new(),
                rotation::RotationRender::new(),
                ctx,
            ),
            Lesson::TrueType => run_game(
                true_type::TrueTypeModel::new(),
                true_type::TrueTypeRender::new(),
                ctx,
            ),
        }
    }
}

fn run_game<M, R>(m: M, r: R, ctx: Context) -> (RunOutcome, Context)
where
    M: Model,
    R: Render<Model = M>,
{
    let mut g = Game::new(m, r, ctx);
    let outcome = g.run();
    (outcome, g.context)
}
