//! Fixed page content. Everything the sections render comes from here so the
//! in-page link targets can be checked against the sections that expose them.

use crate::components::icons::IconKind;

/// In-page fragment targets exposed by the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Agency,
    Services,
    Portfolio,
    Contact,
}

impl Anchor {
    /// Element id rendered by the owning section.
    pub const fn id(self) -> &'static str {
        match self {
            Anchor::Agency => "nosotros",
            Anchor::Services => "servicios",
            Anchor::Portfolio => "portafolio",
            Anchor::Contact => "contacto",
        }
    }

    /// Fragment link to the section, always `#` + [`Anchor::id`].
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Anchor,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Agencia", target: Anchor::Agency },
    NavLink { label: "Servicios", target: Anchor::Services },
    NavLink { label: "Portafolio", target: Anchor::Portfolio },
    NavLink { label: "Contacto", target: Anchor::Contact },
];

pub const QUOTE_CTA: NavLink = NavLink { label: "Cotizar Proyecto", target: Anchor::Contact };

pub const HERO_CTAS: [NavLink; 2] = [
    NavLink { label: "Ver Showreel", target: Anchor::Portfolio },
    NavLink { label: "Hablar con un Productor", target: Anchor::Contact },
];

/// Page sections in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Services,
    Portfolio,
    Contact,
    Footer,
}

impl Section {
    pub fn anchor(self) -> Option<Anchor> {
        match self {
            Section::About => Some(Anchor::Agency),
            Section::Services => Some(Anchor::Services),
            Section::Portfolio => Some(Anchor::Portfolio),
            Section::Contact => Some(Anchor::Contact),
            Section::Hero | Section::Footer => None,
        }
    }
}

pub const PAGE_LAYOUT: [Section; 6] = [
    Section::Hero,
    Section::About,
    Section::Services,
    Section::Portfolio,
    Section::Contact,
    Section::Footer,
];

pub const HERO_VIDEO: &str = "/reel.mp4";
pub const HERO_POSTER: &str = "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const AGENCY_STATS: [Stat; 3] = [
    Stat { value: "4+", label: "Años Exp." },
    Stat { value: "150+", label: "Proyectos" },
    Stat { value: "100%", label: "A Medida" },
];

pub const AGENCY_PARAGRAPHS: [&str; 2] = [
    "En Escofilm, no somos solo operadores de cámara; somos narradores estratégicos. Entendemos que las Grandes Corporaciones necesitan algo más que \"contenido bonito\": necesitan seguridad, consistencia y un retorno de inversión claro.",
    "Nuestra metodología de \"Personalización Total\" elimina los paquetes genéricos. Analizamos tu marca, tu audiencia y tus objetivos comerciales para diseñar una producción visual que no solo se ve bien, sino que vende.",
];

/// Colour of a service icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Light,
    Muted,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Accent => "tone-accent",
            Tone::Light => "tone-light",
            Tone::Muted => "tone-muted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffer {
    pub icon: IconKind,
    pub tone: Tone,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [ServiceOffer; 6] = [
    ServiceOffer {
        icon: IconKind::Film,
        tone: Tone::Accent,
        title: "Producción Audiovisual",
        description: "Video corporativo, comerciales y cobertura de eventos con equipos de cine digital 4K.",
    },
    ServiceOffer {
        icon: IconKind::Megaphone,
        tone: Tone::Light,
        title: "Campañas Publicitarias",
        description: "Creatividad estratégica. Desde el concepto hasta la ejecución de campañas de alto impacto.",
    },
    ServiceOffer {
        icon: IconKind::Users,
        tone: Tone::Muted,
        title: "Gestión Social Media",
        description: "Community Management integral. No solo posteamos, gestionamos la reputación de tu marca.",
    },
    ServiceOffer {
        icon: IconKind::Monitor,
        tone: Tone::Accent,
        title: "Desarrollo Web & SEO",
        description: "Sitios web corporativos optimizados para velocidad y conversión. Diseño UX/UI moderno.",
    },
    ServiceOffer {
        icon: IconKind::Zap,
        tone: Tone::Light,
        title: "Meta Ads & Growth",
        description: "Gestión de presupuesto publicitario en Facebook e Instagram para maximizar leads.",
    },
    ServiceOffer {
        icon: IconKind::Palette,
        tone: Tone::Muted,
        title: "Diseño & Branding",
        description: "Identidad visual, logotipos y manuales de marca asistidos por Inteligencia Artificial.",
    },
];

/// Footprint of a tile in the portfolio grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSpan {
    /// Two columns, two rows, caption always visible.
    Feature,
    /// One cell, caption on hover.
    Standard,
    /// Two columns, caption always visible.
    Wide,
}

impl TileSpan {
    pub fn class(self) -> &'static str {
        match self {
            TileSpan::Feature => "tile--feature",
            TileSpan::Standard => "tile--standard",
            TileSpan::Wide => "tile--wide",
        }
    }

    pub fn shows_caption(self) -> bool {
        !matches!(self, TileSpan::Standard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectTile {
    pub image: &'static str,
    pub alt: &'static str,
    pub category: Option<&'static str>,
    pub title: &'static str,
    pub span: TileSpan,
}

pub const PROJECTS: [ProjectTile; 4] = [
    ProjectTile {
        image: "https://images.unsplash.com/photo-1493863641943-9b68992a8d07?w=800&q=80",
        alt: "Fashion",
        category: Some("Campaña Moda"),
        title: "Vogue Style Shoot",
        span: TileSpan::Feature,
    },
    ProjectTile {
        image: "/comida.jpg",
        alt: "Corporate",
        category: None,
        title: "Desserts",
        span: TileSpan::Standard,
    },
    ProjectTile {
        image: "https://images.unsplash.com/photo-1600607686527-6fb886090705?w=800&q=80",
        alt: "Urban",
        category: None,
        title: "Urban Brand",
        span: TileSpan::Standard,
    },
    ProjectTile {
        image: "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?w=800&q=80",
        alt: "Events",
        category: Some("Eventos"),
        title: "Conferencia Global Tech",
        span: TileSpan::Wide,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelAccent {
    Green,
    Amber,
}

impl ChannelAccent {
    pub fn class(self) -> &'static str {
        match self {
            ChannelAccent::Green => "channel--green",
            ChannelAccent::Amber => "channel--amber",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: IconKind,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub href: &'static str,
    pub accent: ChannelAccent,
}

pub const CONTACT_CHANNELS: [ContactChannel; 2] = [
    ContactChannel {
        icon: IconKind::Smartphone,
        title: "WhatsApp Business",
        subtitle: "Respuesta Rápida",
        href: "#",
        accent: ChannelAccent::Green,
    },
    ContactChannel {
        icon: IconKind::Mail,
        title: "Email Corporativo",
        subtitle: "Solicitar Propuesta PDF",
        href: "#",
        accent: ChannelAccent::Amber,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "Instagram", href: "#" },
    SocialLink { label: "Facebook", href: "#" },
    SocialLink { label: "LinkedIn", href: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_ANCHORS: [Anchor; 4] = [
        Anchor::Agency,
        Anchor::Services,
        Anchor::Portfolio,
        Anchor::Contact,
    ];

    fn rendered_anchors() -> Vec<Anchor> {
        PAGE_LAYOUT.iter().filter_map(|section| section.anchor()).collect()
    }

    #[test]
    fn every_nav_link_targets_a_rendered_section() {
        let rendered = rendered_anchors();
        for link in NAV_LINKS.iter().chain([&QUOTE_CTA]).chain(HERO_CTAS.iter()) {
            assert!(
                rendered.contains(&link.target),
                "{} points at #{} which no section renders",
                link.label,
                link.target.id()
            );
        }
    }

    #[test]
    fn nav_hrefs_match_expected_fragments() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|link| link.target.href()).collect();
        assert_eq!(hrefs, ["#nosotros", "#servicios", "#portafolio", "#contacto"]);
        let labels: Vec<_> = NAV_LINKS.iter().map(|link| link.label).collect();
        assert_eq!(labels, ["Agencia", "Servicios", "Portafolio", "Contacto"]);
    }

    #[test]
    fn every_anchor_is_rendered_exactly_once() {
        let rendered = rendered_anchors();
        for anchor in ALL_ANCHORS {
            let count = rendered.iter().filter(|a| **a == anchor).count();
            assert_eq!(count, 1, "#{} rendered {} times", anchor.id(), count);
        }
        let ids: HashSet<_> = rendered.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), rendered.len());
    }

    #[test]
    fn layout_starts_with_hero_and_ends_with_footer() {
        assert_eq!(PAGE_LAYOUT.first(), Some(&Section::Hero));
        assert_eq!(PAGE_LAYOUT.last(), Some(&Section::Footer));
    }

    #[test]
    fn service_titles_are_unique() {
        let titles: HashSet<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), SERVICES.len());
        assert!(SERVICES.iter().all(|s| !s.description.is_empty()));
    }

    #[test]
    fn captioned_tiles_carry_a_category() {
        for tile in PROJECTS {
            assert_eq!(tile.span.shows_caption(), tile.category.is_some(), "{}", tile.title);
        }
    }
}
