use anyhow::{anyhow, Result};
use winit::keyboard::KeyCode as WinitKey;

use crate::input::{KeyCode, NamedKey};
use crate::mesh::NormalPolicy;
use crate::scene::{Scene, Surface};
use crate::state::ShadingMode;

pub const WINDOW_TITLE: &str = "COSC 4328 HW 3";
pub const WINDOW_SIZE: (u32, u32) = (1024, 1024);

const USAGE: &str = "Usage: campus-viewer [--summary-only] [--summed-normals] [--gouraud]";

/// Command line switches. Running without any opens the viewer with the
/// default settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliOptions {
    pub summary_only: bool,
    pub normal_policy: NormalPolicy,
    pub shading: ShadingMode,
}

impl CliOptions {
    pub fn parse() -> Result<Self> {
        Self::parse_from(std::env::args().skip(1))
    }

    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut options = Self::default();
        for arg in args {
            match arg.as_ref() {
                "--summary-only" => options.summary_only = true,
                "--summed-normals" => options.normal_policy = NormalPolicy::Summed,
                "--gouraud" => options.shading = ShadingMode::Gouraud,
                other => {
                    return Err(anyhow!("Unknown argument: {other}. {USAGE}"));
                }
            }
        }
        Ok(options)
    }
}

/// Prints one line per prop describing what will be drawn.
pub fn print_scene_summary(scene: &Scene) {
    println!(
        "Loaded campus with {} props ({} lights, {} camera presets)",
        scene.props.len(),
        scene.lights.len(),
        scene.presets.len()
    );
    for prop in &scene.props {
        let kind = match prop.surface {
            Surface::Unlit => "outline".to_string(),
            Surface::Lit(material) => format!("lit, shininess {:.1}", material.shininess),
        };
        println!(
            " - {} ({kind}) vertices={} triangles={} center=({:.3}, {:.3}, {:.3})",
            prop.name,
            prop.mesh.vertex_count(),
            if prop.is_outline() {
                0
            } else {
                prop.mesh.triangle_count()
            },
            prop.center.x,
            prop.center.y,
            prop.center.z
        );
    }
}

/// Translates the physical keys the viewer binds.
pub fn map_keycode(code: WinitKey) -> Option<KeyCode> {
    Some(match code {
        WinitKey::Space => KeyCode::Named(NamedKey::Space),
        WinitKey::Tab => KeyCode::Named(NamedKey::Tab),
        WinitKey::Escape => KeyCode::Named(NamedKey::Escape),
        WinitKey::ArrowLeft => KeyCode::Named(NamedKey::Left),
        WinitKey::ArrowRight => KeyCode::Named(NamedKey::Right),
        WinitKey::ArrowUp => KeyCode::Named(NamedKey::Up),
        WinitKey::ArrowDown => KeyCode::Named(NamedKey::Down),
        WinitKey::ShiftLeft => KeyCode::Named(NamedKey::LeftShift),
        WinitKey::ShiftRight => KeyCode::Named(NamedKey::RightShift),
        WinitKey::ControlLeft => KeyCode::Named(NamedKey::LeftCtrl),
        WinitKey::ControlRight => KeyCode::Named(NamedKey::RightCtrl),
        WinitKey::KeyW => KeyCode::Character('W'),
        WinitKey::KeyA => KeyCode::Character('A'),
        WinitKey::KeyS => KeyCode::Character('S'),
        WinitKey::KeyD => KeyCode::Character('D'),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Command;

    #[test]
    fn no_arguments_means_defaults() {
        let options = CliOptions::parse_from(Vec::<String>::new()).unwrap();
        assert_eq!(options, CliOptions::default());
        assert_eq!(options.normal_policy, NormalPolicy::Incremental);
        assert_eq!(options.shading, ShadingMode::Phong);
    }

    #[test]
    fn parses_known_switches() {
        let options =
            CliOptions::parse_from(["--summary-only", "--summed-normals", "--gouraud"]).unwrap();
        assert!(options.summary_only);
        assert_eq!(options.normal_policy, NormalPolicy::Summed);
        assert_eq!(options.shading, ShadingMode::Gouraud);
    }

    #[test]
    fn unknown_switch_is_an_error() {
        let err = CliOptions::parse_from(["--wireframe"]).unwrap_err();
        assert!(err.to_string().contains("--wireframe"));
    }

    #[test]
    fn every_mapped_key_has_a_command() {
        let keys = [
            WinitKey::Space,
            WinitKey::Tab,
            WinitKey::Escape,
            WinitKey::ArrowLeft,
            WinitKey::ArrowRight,
            WinitKey::ArrowUp,
            WinitKey::ArrowDown,
            WinitKey::ShiftLeft,
            WinitKey::ShiftRight,
            WinitKey::ControlLeft,
            WinitKey::ControlRight,
            WinitKey::KeyW,
            WinitKey::KeyA,
            WinitKey::KeyS,
            WinitKey::KeyD,
        ];
        for key in keys {
            let code = map_keycode(key).unwrap();
            assert!(Command::for_key(code).is_some(), "{key:?} is unbound");
        }
        assert_eq!(map_keycode(WinitKey::KeyQ), None);
    }
}
