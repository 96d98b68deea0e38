use serde::{Deserialize, Serialize};

/// Accent color of a card, tag group or progress bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Indigo,
    Purple,
    Emerald,
    Cyan,
    Amber,
    Rose,
}

/// Tailwind classes for one accent. Class names are spelled out in full so
/// the tailwind scanner picks them up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub hex: &'static str,
    pub text: &'static str,
    pub bg: &'static str,
    pub bg_solid: &'static str,
    pub border: &'static str,
    pub border_hover: &'static str,
    pub gradient: &'static str,
    pub tag: &'static str,
    pub chip: &'static str,
    pub glow: &'static str,
}

impl Accent {
    pub const ALL: [Accent; 6] = [
        Accent::Indigo,
        Accent::Purple,
        Accent::Emerald,
        Accent::Cyan,
        Accent::Amber,
        Accent::Rose,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Indigo => "indigo",
            Self::Purple => "purple",
            Self::Emerald => "emerald",
            Self::Cyan => "cyan",
            Self::Amber => "amber",
            Self::Rose => "rose",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Indigo => Palette {
                hex: "#6366f1",
                text: "text-indigo-400",
                bg: "bg-indigo-500/10",
                bg_solid: "bg-indigo-500",
                border: "border-indigo-500/30",
                border_hover: "hover:border-indigo-400/50",
                gradient: "from-indigo-600/30 to-purple-600/30",
                tag: "bg-indigo-500/15 text-indigo-300 border-indigo-500/30 hover:bg-indigo-500/25",
                chip: "bg-indigo-500/10 text-indigo-400 group-hover:bg-indigo-500/20",
                glow: "shadow-indigo-500/20",
            },
            Self::Purple => Palette {
                hex: "#a855f7",
                text: "text-purple-400",
                bg: "bg-purple-500/10",
                bg_solid: "bg-purple-500",
                border: "border-purple-500/30",
                border_hover: "hover:border-purple-400/50",
                gradient: "from-purple-600/30 to-pink-600/30",
                tag: "bg-purple-500/15 text-purple-300 border-purple-500/30 hover:bg-purple-500/25",
                chip: "bg-purple-500/10 text-purple-400 group-hover:bg-purple-500/20",
                glow: "shadow-purple-500/20",
            },
            Self::Emerald => Palette {
                hex: "#10b981",
                text: "text-emerald-400",
                bg: "bg-emerald-500/10",
                bg_solid: "bg-emerald-500",
                border: "border-emerald-500/30",
                border_hover: "hover:border-emerald-400/50",
                gradient: "from-emerald-600/30 to-teal-600/30",
                tag: "bg-emerald-500/15 text-emerald-300 border-emerald-500/30 hover:bg-emerald-500/25",
                chip: "bg-emerald-500/10 text-emerald-400 group-hover:bg-emerald-500/20",
                glow: "shadow-emerald-500/20",
            },
            Self::Cyan => Palette {
                hex: "#06b6d4",
                text: "text-cyan-400",
                bg: "bg-cyan-500/10",
                bg_solid: "bg-cyan-500",
                border: "border-cyan-500/30",
                border_hover: "hover:border-cyan-400/50",
                gradient: "from-cyan-600/30 to-blue-600/30",
                tag: "bg-cyan-500/15 text-cyan-300 border-cyan-500/30 hover:bg-cyan-500/25",
                chip: "bg-cyan-500/10 text-cyan-400 group-hover:bg-cyan-500/20",
                glow: "shadow-cyan-500/20",
            },
            Self::Amber => Palette {
                hex: "#f59e0b",
                text: "text-amber-400",
                bg: "bg-amber-500/10",
                bg_solid: "bg-amber-500",
                border: "border-amber-500/30",
                border_hover: "hover:border-amber-400/50",
                gradient: "from-amber-600/30 to-orange-600/30",
                tag: "bg-amber-500/15 text-amber-300 border-amber-500/30 hover:bg-amber-500/25",
                chip: "bg-amber-500/10 text-amber-400 group-hover:bg-amber-500/20",
                glow: "shadow-amber-500/20",
            },
            Self::Rose => Palette {
                hex: "#f43f5e",
                text: "text-rose-400",
                bg: "bg-rose-500/10",
                bg_solid: "bg-rose-500",
                border: "border-rose-500/30",
                border_hover: "hover:border-rose-400/50",
                gradient: "from-rose-600/30 to-pink-600/30",
                tag: "bg-rose-500/15 text-rose-300 border-rose-500/30 hover:bg-rose-500/25",
                chip: "bg-rose-500/10 text-rose-400 group-hover:bg-rose-500/20",
                glow: "shadow-rose-500/20",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_classes_match_accent() {
        for accent in Accent::ALL {
            let p = accent.palette();
            let name = accent.name();
            let classes = [
                p.text,
                p.bg,
                p.bg_solid,
                p.border,
                p.border_hover,
                p.tag,
                p.chip,
                p.glow,
            ];
            for class in classes {
                assert!(class.contains(name), "{class} should use the {name} accent");
            }
            assert!(p.gradient.starts_with(&format!("from-{name}-")));
            assert!(p.hex.starts_with('#') && p.hex.len() == 7);
        }
    }

    #[test]
    fn test_accent_from_json() {
        let accents: Vec<Accent> = serde_json::from_str(r#"["rose", "amber", "indigo"]"#).unwrap();
        assert_eq!(accents, vec![Accent::Rose, Accent::Amber, Accent::Indigo]);
        assert!(serde_json::from_str::<Accent>(r#""teal""#).is_err());
    }
}
