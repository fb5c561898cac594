use yew::prelude::*;

/// Glyphs used across the site. Rendered as plain text so the page
/// needs no icon font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ScanFace,
    Eye,
    Sparkles,
    Users,
    User,
    Heart,
    Award,
    GraduationCap,
    Globe,
    Phone,
    Mail,
    MapPin,
    Clock,
    Star,
    Quote,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    ArrowLeft,
    ArrowUp,
    Facebook,
    Instagram,
    Twitter,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::ScanFace => "👃",
            Icon::Eye => "👁",
            Icon::Sparkles => "✨",
            Icon::Users => "👥",
            Icon::User => "👤",
            Icon::Heart => "❤",
            Icon::Award => "🏅",
            Icon::GraduationCap => "🎓",
            Icon::Globe => "🌍",
            Icon::Phone => "📞",
            Icon::Mail => "✉",
            Icon::MapPin => "📍",
            Icon::Clock => "🕘",
            Icon::Star => "★",
            Icon::Quote => "❝",
            Icon::ChevronDown => "⌄",
            Icon::ChevronLeft => "‹",
            Icon::ChevronRight => "›",
            Icon::ArrowLeft => "←",
            Icon::ArrowUp => "↑",
            Icon::Facebook => "f",
            Icon::Instagram => "◎",
            Icon::Twitter => "𝕏",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            {props.icon.glyph()}
        </span>
    }
}
