//! Centralized icon API for the primitive layer.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic icon names available to primitives and apps.
pub enum IconName {
    /// Validation error marker.
    ErrorCircle,
    /// Validation warning marker.
    Warning,
    /// Success marker.
    Checkmark,
    /// Close/dismiss glyph.
    Dismiss,
    /// In-progress indicator.
    Spinner,
}

impl IconName {
    /// Stable DOM token for the icon.
    pub fn token(self) -> &'static str {
        match self {
            Self::ErrorCircle => "error-circle",
            Self::Warning => "warning",
            Self::Checkmark => "checkmark",
            Self::Dismiss => "dismiss",
            Self::Spinner => "spinner",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::ErrorCircle => {
                "M10 2a8 8 0 1 1 0 16a8 8 0 0 1 0-16Zm0 11.5a1 1 0 1 0 0 2a1 1 0 0 0 0-2ZM10 5a1 1 0 0 0-1 1v5a1 1 0 1 0 2 0V6a1 1 0 0 0-1-1Z"
            }
            Self::Warning => {
                "M8.7 3.2a1.5 1.5 0 0 1 2.6 0l6.5 11.5A1.5 1.5 0 0 1 16.5 17h-13a1.5 1.5 0 0 1-1.3-2.3ZM10 13a1 1 0 1 0 0 2a1 1 0 0 0 0-2Zm0-6a1 1 0 0 0-1 1v3a1 1 0 1 0 2 0V8a1 1 0 0 0-1-1Z"
            }
            Self::Checkmark => "M7.5 13.6L4 10.1l-1.4 1.4l4.9 4.9L17.4 6.5L16 5.1Z",
            Self::Dismiss => {
                "M4.4 3L10 8.6L15.6 3L17 4.4L11.4 10L17 15.6L15.6 17L10 11.4L4.4 17L3 15.6L8.6 10L3 4.4Z"
            }
            Self::Spinner => "M10 2a8 8 0 1 0 8 8h-2a6 6 0 1 1-6-6Z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon size tokens.
pub enum IconSize {
    /// Inline with dense text.
    Sm,
    /// Default size.
    #[default]
    Md,
    /// Prominent glyph.
    Lg,
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn px(self) -> u8 {
        match self {
            Self::Sm => 14,
            Self::Md => 18,
            Self::Lg => 24,
        }
    }
}

#[component]
/// Decorative SVG icon. Icons are hidden from assistive technology; pair them with text.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class="ui-icon"
            viewBox="0 0 20 20"
            width=px
            height=px
            fill="currentColor"
            aria-hidden="true"
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            <path d=icon.path()></path>
        </svg>
    }
}
