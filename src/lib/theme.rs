//! Shared UI variants and their Tailwind classes so every component picks
//! from the same fixed sets.

/// Colour variants for badges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
}

impl BadgeVariant {
    pub fn classes(self) -> &'static str {
        match self {
            BadgeVariant::Primary => {
                "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300"
            }
            BadgeVariant::Secondary => {
                "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-300"
            }
            BadgeVariant::Success => {
                "bg-emerald-100 text-emerald-800 dark:bg-emerald-900 dark:text-emerald-300"
            }
            BadgeVariant::Danger => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300",
            BadgeVariant::Warning => {
                "bg-amber-100 text-amber-800 dark:bg-amber-900 dark:text-amber-300"
            }
            BadgeVariant::Info => "bg-sky-100 text-sky-800 dark:bg-sky-900 dark:text-sky-300",
        }
    }
}

/// Badge sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BadgeSize {
    pub fn classes(self) -> &'static str {
        match self {
            BadgeSize::Sm => "px-2 py-0.5 text-xs",
            BadgeSize::Md => "px-2.5 py-0.5 text-sm",
            BadgeSize::Lg => "px-3 py-1 text-base",
        }
    }
}

/// Full class list for a badge.
pub fn badge_classes(variant: BadgeVariant, size: BadgeSize) -> String {
    format!(
        "inline-flex items-center rounded-full font-medium {} {}",
        variant.classes(),
        size.classes()
    )
}

/// Modal widths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ModalSize {
    pub fn classes(self) -> &'static str {
        match self {
            ModalSize::Sm => "max-w-sm",
            ModalSize::Md => "max-w-lg",
            ModalSize::Lg => "max-w-3xl",
        }
    }
}

/// Placeholder shapes for skeleton loaders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkeletonShape {
    Text { lines: u8 },
    Circle,
    Rect,
}

impl Default for SkeletonShape {
    fn default() -> Self {
        SkeletonShape::Text { lines: 3 }
    }
}

impl SkeletonShape {
    /// Classes for each block; text lines get a shorter last line.
    pub fn block_classes(self) -> Vec<&'static str> {
        match self {
            SkeletonShape::Text { lines } => {
                let lines = lines.max(1);
                (0..lines)
                    .map(|index| {
                        if index + 1 == lines && lines > 1 {
                            "animate-pulse bg-gray-200 dark:bg-gray-700 h-3 rounded w-2/3"
                        } else {
                            "animate-pulse bg-gray-200 dark:bg-gray-700 h-3 rounded w-full"
                        }
                    })
                    .collect()
            }
            SkeletonShape::Circle => {
                vec!["animate-pulse bg-gray-200 dark:bg-gray-700 h-12 w-12 rounded-full"]
            }
            SkeletonShape::Rect => {
                vec!["animate-pulse bg-gray-200 dark:bg-gray-700 h-32 w-full rounded-lg"]
            }
        }
    }
}

pub struct Theme;

impl Theme {
    /// Surface used by cards and modal panels.
    pub const SURFACE: &'static str = "rounded-xl border border-gray-200 bg-white shadow-sm dark:border-gray-700 dark:bg-gray-800";

    /// Standard text input.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

    /// Material icon that inherits the text colour.
    pub const ICON: &'static str = "material-symbols-outlined text-gray-400 dark:text-gray-500";
}
