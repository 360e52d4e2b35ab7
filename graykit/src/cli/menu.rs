//! Menu text and selection parsing

use super::CliError;
use graykit_filter::KernelPreset;
use std::io::{self, Write};
use std::str::FromStr;

const MAIN_MENU: &str = "\n=== Image Processing Menu ===
1) Input/change the path to a PGM file
2) Set output directory path
3) Apply brightness/contrast adjustment
4) Apply gamma correction
5) Apply convolution
6) Draw shape
0) Exit program
==========================";

const SHAPE_MENU: &str = "\nDrawing Options:
1. Draw Circle
2. Draw Line
3. Draw Rectangle";

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    LoadImage,
    SetOutputDir,
    BrightnessContrast,
    GammaCorrection,
    Convolution,
    DrawShape,
}

impl MenuChoice {
    /// Whether the entry operates on the loaded image.
    pub fn needs_image(self) -> bool {
        matches!(
            self,
            Self::BrightnessContrast | Self::GammaCorrection | Self::Convolution | Self::DrawShape
        )
    }
}

impl FromStr for MenuChoice {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "0" => Self::Exit,
            "1" => Self::LoadImage,
            "2" => Self::SetOutputDir,
            "3" => Self::BrightnessContrast,
            "4" => Self::GammaCorrection,
            "5" => Self::Convolution,
            "6" => Self::DrawShape,
            other => return Err(CliError::InvalidChoice(other.to_string())),
        })
    }
}

/// Shapes offered by the drawing submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeChoice {
    Circle,
    Line,
    Rectangle,
}

impl FromStr for ShapeChoice {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "1" => Self::Circle,
            "2" => Self::Line,
            "3" => Self::Rectangle,
            other => return Err(CliError::InvalidChoice(other.to_string())),
        })
    }
}

/// Look up a kernel by its 1-based menu number.
pub fn kernel_choice(s: &str) -> Result<KernelPreset, CliError> {
    s.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| KernelPreset::ALL.get(i).copied())
        .ok_or_else(|| CliError::InvalidChoice(s.trim().to_string()))
}

pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{MAIN_MENU}")
}

pub fn print_kernel_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Select kernel type:")?;
    for (i, preset) in KernelPreset::ALL.iter().enumerate() {
        writeln!(out, "{}) {}", i + 1, preset.label())?;
    }
    Ok(())
}

pub fn print_shape_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{SHAPE_MENU}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!("0".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert_eq!(" 6 ".parse::<MenuChoice>().unwrap(), MenuChoice::DrawShape);
        assert!(matches!(
            "7".parse::<MenuChoice>(),
            Err(CliError::InvalidChoice(s)) if s == "7"
        ));
        assert!("".parse::<MenuChoice>().is_err());
        assert!(MenuChoice::Convolution.needs_image());
        assert!(!MenuChoice::SetOutputDir.needs_image());
    }

    #[test]
    fn test_shape_and_kernel_choice() {
        assert_eq!("2".parse::<ShapeChoice>().unwrap(), ShapeChoice::Line);
        assert!("4".parse::<ShapeChoice>().is_err());
        assert_eq!(kernel_choice("1").unwrap(), KernelPreset::Identity);
        assert_eq!(kernel_choice("5").unwrap(), KernelPreset::SobelVertical);
        assert!(kernel_choice("0").is_err());
        assert!(kernel_choice("6").is_err());
        assert!(kernel_choice("x").is_err());
    }

    #[test]
    fn test_kernel_menu_text() {
        let mut out = Vec::new();
        print_kernel_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Select kernel type:\n1) Identity kernel\n"));
        assert!(text.ends_with("5) Vertical Sobel kernel\n"));
    }
}
