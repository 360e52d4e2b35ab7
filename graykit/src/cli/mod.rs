//! Interactive menu frontend
//!
//! [`run`] drives a [`Session`] from line-oriented input. Actions that fail
//! print their error and return to the menu; end of input exits like
//! choosing `0`.

mod error;
mod menu;
mod prompt;
mod session;

pub use error::{CliError, CliResult};
pub use menu::{
    MenuChoice, ShapeChoice, kernel_choice, print_kernel_menu, print_menu, print_shape_menu,
};
pub use prompt::Prompter;
pub use session::{BRIGHTNESS_CONTRAST_FILE, DRAWN_SHAPE_FILE, GAMMA_FILE, Session, Shape};

use graykit_filter::{BrightnessContrast, Convolution, GammaCorrection};
use log::warn;
use std::io::{BufRead, Write};

/// Run the menu loop until the user exits or input ends.
///
/// # Errors
///
/// Only failures to read the menu choice or to write to `output` are
/// returned; everything else is reported inline.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, output: W) -> CliResult<()> {
    let mut prompter = Prompter::new(input, output);

    loop {
        print_menu(prompter.output())?;
        let Some(line) = prompter.read_line("Enter your choice: ")? else {
            break;
        };
        let choice = match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => break,
            Ok(choice) => choice,
            Err(_) => {
                prompter.say("Invalid choice. Please try again.")?;
                continue;
            }
        };

        match dispatch(session, &mut prompter, choice) {
            Ok(()) => {}
            Err(CliError::EndOfInput) => break,
            Err(e) => {
                match std::error::Error::source(&e) {
                    Some(source) => warn!("{choice:?} failed: {e} ({source})"),
                    None => warn!("{choice:?} failed: {e}"),
                }
                prompter.say(e)?;
            }
        }
    }

    prompter.say("Exiting program...")
}

fn dispatch<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
    choice: MenuChoice,
) -> CliResult<()> {
    if choice.needs_image() {
        session.image()?;
    }

    match choice {
        MenuChoice::Exit => {}
        MenuChoice::LoadImage => {
            let path = prompter.ask_line("Enter the path to your PGM file: ")?;
            session.load(path.trim())?;
            prompter.say("Image loaded successfully!")?;
        }
        MenuChoice::SetOutputDir => {
            let dir = prompter.ask_line("Enter the output directory path: ")?;
            let dir = dir.trim();
            if session.set_output_dir(dir)? {
                prompter.say(format!("Creating directory: {dir}"))?;
            }
        }
        MenuChoice::BrightnessContrast => {
            let alpha: f64 = prompter.ask("Enter contrast factor (alpha): ")?;
            let beta: i32 = prompter.ask("Enter brightness value (beta): ")?;
            let path = session.apply_filter(
                &BrightnessContrast::new(alpha, beta),
                BRIGHTNESS_CONTRAST_FILE,
            )?;
            prompter.say(format!(
                "Saved brightness/contrast adjusted image to: {}",
                path.display()
            ))?;
        }
        MenuChoice::GammaCorrection => {
            let gamma: f64 = prompter.ask("Enter gamma value: ")?;
            let path = session.apply_filter(&GammaCorrection::new(gamma)?, GAMMA_FILE)?;
            prompter.say(format!(
                "Saved gamma-corrected image to: {}",
                path.display()
            ))?;
        }
        MenuChoice::Convolution => {
            print_kernel_menu(prompter.output())?;
            let preset = kernel_choice(&prompter.ask_line("Enter choice: ")?)?;
            let file_name = format!("{}.pgm", preset.name());
            let path = session.apply_filter(&Convolution::new(preset.kernel()), &file_name)?;
            prompter.say(format!("Saved convolved image to: {}", path.display()))?;
        }
        MenuChoice::DrawShape => {
            print_shape_menu(prompter.output())?;
            let shape: ShapeChoice = prompter.ask_line("Enter your choice (1-3): ")?.parse()?;
            let value: u8 = prompter.ask("Enter pixel value (0-255): ")?;
            let shape = match shape {
                ShapeChoice::Circle => Shape::Circle {
                    center: prompter.ask("Enter center X and Y coordinates (e.g. 5 6): ")?,
                    radius: prompter.ask("Enter radius: ")?,
                },
                ShapeChoice::Line => Shape::Line {
                    from: prompter.ask("Enter start X and Y coordinates (e.g. 10 15): ")?,
                    to: prompter.ask("Enter end X and Y coordinates (e.g. 20 25): ")?,
                },
                ShapeChoice::Rectangle => Shape::Rectangle {
                    top_left: prompter.ask("Enter top-left X and Y coordinates (e.g. 5 5): ")?,
                    bottom_right: prompter
                        .ask("Enter bottom-right X and Y coordinates (e.g. 15 15): ")?,
                },
            };
            let path = session.draw(&shape, value)?;
            prompter.say(format!("Saved drawn image to: {}", path.display()))?;
        }
    }
    Ok(())
}
