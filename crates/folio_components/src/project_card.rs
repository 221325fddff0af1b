//! Project card
//!
//! A card showing a project's media, title, dates, description, tags and
//! links. It rises into view once, then responds to the pointer: the card lifts,
//! an accent bar sweeps across its bottom edge and a dark overlay fades over the
//! image. Tags and links have their own hover and press states.

use folio_animation::{
    Easing, MotionTarget, MotionVariant, RevealController, Shadow, SpringConfig, Transition,
    ViewportOptions, VisualState,
};
use folio_core::{Color, ColorToken, InteractionState, PointerEvent, StateTransitions};

use crate::element::{Background, Element, ElementKind, MotionProps};

const ENTRANCE_SECONDS: f32 = 0.5;
const HOVER_SECONDS: f32 = 0.3;
const CARD_LIFT: f32 = -5.0;
const LINK_LIFT: f32 = -2.0;
const HOVER_SCALE: f32 = 1.05;
const PRESS_SCALE: f32 = 0.95;
const MEDIA_HEIGHT: f32 = 192.0;
const ACCENT_HEIGHT: f32 = 4.0;
const LINK_REL: &str = "noopener noreferrer";

/// Spring used by tag and link badges
const BADGE_SPRING: SpringConfig = SpringConfig::new(500.0, 25.0, 1.0);

/// External link shown at the bottom of a card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectLink {
    pub name: String,
    pub url: String,
}

impl ProjectLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Animated parts of a card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardPart {
    Card,
    Image,
    /// Gradient bar along the bottom edge, follows card hover
    AccentBar,
    /// Darkening layer over the image, follows card hover
    Overlay,
    Tag(usize),
    Link(usize),
}

impl CardPart {
    pub fn transition(&self) -> Transition {
        match self {
            CardPart::Card => Transition::tween(ENTRANCE_SECONDS, Easing::EaseInOut),
            CardPart::Image | CardPart::AccentBar | CardPart::Overlay => {
                Transition::tween(HOVER_SECONDS, Easing::EaseInOut)
            }
            CardPart::Tag(_) | CardPart::Link(_) => Transition::spring(BADGE_SPRING),
        }
    }
}

/// Pointer state of every interactive part of one card
///
/// Each part owns its state; an event routed to one tag never changes
/// another tag, and the accent bar and overlay derive from the card's state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardInteraction {
    card: InteractionState,
    image: InteractionState,
    tags: Vec<InteractionState>,
    links: Vec<InteractionState>,
}

impl CardInteraction {
    pub fn new(tags: usize, links: usize) -> Self {
        Self {
            card: InteractionState::Idle,
            image: InteractionState::Idle,
            tags: vec![InteractionState::Idle; tags],
            links: vec![InteractionState::Idle; links],
        }
    }

    /// Current pointer state of a part, `None` for unknown tag/link indices
    pub fn state(&self, part: CardPart) -> Option<InteractionState> {
        match part {
            CardPart::Card | CardPart::AccentBar | CardPart::Overlay => Some(self.card),
            CardPart::Image => Some(self.image),
            CardPart::Tag(i) => self.tags.get(i).copied(),
            CardPart::Link(i) => self.links.get(i).copied(),
        }
    }

    /// Route a pointer event to a part
    ///
    /// Returns the parts whose visual state changed along with their new
    /// state. Events for the accent bar or overlay are routed to the card.
    pub fn handle(
        &mut self,
        part: CardPart,
        event: &PointerEvent,
    ) -> Vec<(CardPart, VisualState)> {
        let slot = match part {
            CardPart::Card | CardPart::AccentBar | CardPart::Overlay => Some(&mut self.card),
            CardPart::Image => Some(&mut self.image),
            CardPart::Tag(i) => self.tags.get_mut(i),
            CardPart::Link(i) => self.links.get_mut(i),
        };
        let Some(slot) = slot else {
            tracing::warn!(?part, "pointer event for a part the card does not have");
            return Vec::new();
        };

        let Some(next) = slot.on_event(event) else {
            return Vec::new();
        };
        let before = engaged(*slot);
        *slot = next;
        tracing::trace!(?part, state = ?next, "card part transition");

        match part {
            CardPart::Card | CardPart::AccentBar | CardPart::Overlay => {
                if before == engaged(next) {
                    return Vec::new();
                }
                [CardPart::Card, CardPart::AccentBar, CardPart::Overlay]
                    .into_iter()
                    .map(|p| (p, self.visual(p)))
                    .collect()
            }
            _ => vec![(part, self.visual(part))],
        }
    }

    /// Resting visual state of a part given current pointer state
    pub fn visual(&self, part: CardPart) -> VisualState {
        let state = self.state(part).unwrap_or_default();
        let active = engaged(state);
        match part {
            CardPart::Card if active => card_hover(),
            CardPart::Card => VisualState::IDENTITY,
            CardPart::AccentBar => VisualState::IDENTITY.width(if active { 100.0 } else { 0.0 }),
            CardPart::Overlay => VisualState::IDENTITY.opacity(if active { 1.0 } else { 0.0 }),
            CardPart::Image if active => VisualState::IDENTITY.scale(HOVER_SCALE),
            CardPart::Image => VisualState::IDENTITY,
            CardPart::Tag(_) => badge_visual(state, 0.0),
            CardPart::Link(_) => badge_visual(state, LINK_LIFT),
        }
    }
}

/// Pointer is over the part, pressed or not
fn engaged(state: InteractionState) -> bool {
    !matches!(state, InteractionState::Idle)
}

fn card_hover() -> VisualState {
    VisualState::IDENTITY.y(CARD_LIFT).shadow(Shadow::soft())
}

fn badge_visual(state: InteractionState, lift: f32) -> VisualState {
    match state {
        InteractionState::Idle => VisualState::IDENTITY,
        InteractionState::Hovered => VisualState::IDENTITY.scale(HOVER_SCALE).y(lift),
        InteractionState::Pressed => VisualState::IDENTITY.scale(PRESS_SCALE).y(lift),
    }
}

/// Project showcase card
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCard {
    title: String,
    description: String,
    dates: Option<String>,
    tags: Vec<String>,
    image: Option<String>,
    video: Option<String>,
    href: Option<String>,
    links: Vec<ProjectLink>,
}

impl ProjectCard {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            dates: None,
            tags: Vec::new(),
            image: None,
            video: None,
            href: None,
            links: Vec::new(),
        }
    }

    pub fn dates(mut self, dates: impl Into<String>) -> Self {
        self.dates = Some(dates.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(src.into());
        self
    }

    pub fn video(mut self, src: impl Into<String>) -> Self {
        self.video = Some(src.into());
        self
    }

    /// Make the whole card navigate to `href`
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn links(mut self, links: impl IntoIterator<Item = ProjectLink>) -> Self {
        self.links = links.into_iter().collect();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entrance(&self) -> MotionVariant {
        MotionVariant::rise()
    }

    pub fn entrance_controller(&self, target: MotionTarget) -> RevealController {
        RevealController::new(
            target,
            self.entrance(),
            CardPart::Card.transition(),
            ViewportOptions::once(),
        )
    }

    /// Fresh interaction state sized to this card's tags and links
    pub fn interaction(&self) -> CardInteraction {
        CardInteraction::new(self.tags.len(), self.links.len())
    }

    pub fn build(&self) -> Element {
        let entrance = self.entrance();
        let card = Element::block()
            .clip()
            .motion(MotionProps {
                initial: Some(entrance.hidden),
                in_view: Some(entrance.visible),
                hover: Some(card_hover()),
                transition: Some(CardPart::Card.transition()),
                viewport: Some(ViewportOptions::once()),
                ..Default::default()
            })
            .child_opt(self.image_element())
            .child_opt(self.video_element())
            .child(self.body())
            .child(accent_bar());

        match &self.href {
            Some(href) => Element::new(ElementKind::Link {
                href: href.clone(),
                new_tab: false,
                rel: None,
            })
            .child(card),
            None => card,
        }
    }

    fn image_element(&self) -> Option<Element> {
        let src = self.image.as_ref()?;
        let image = Element::block()
            .motion(MotionProps {
                hover: Some(VisualState::IDENTITY.scale(HOVER_SCALE)),
                transition: Some(CardPart::Image.transition()),
                ..Default::default()
            })
            .child(Element::new(ElementKind::Image {
                src: src.clone(),
                alt: self.title.clone(),
            }));
        let overlay = Element::block()
            .background(Background::Gradient(vec![
                Color::BLACK.with_alpha(0.6),
                Color::TRANSPARENT,
            ]))
            .motion(MotionProps {
                initial: Some(VisualState::IDENTITY.opacity(0.0)),
                group_hover: Some(VisualState::IDENTITY),
                transition: Some(CardPart::Overlay.transition()),
                ..Default::default()
            });

        Some(
            Element::block()
                .height(MEDIA_HEIGHT)
                .clip()
                .child(image)
                .child(overlay),
        )
    }

    fn video_element(&self) -> Option<Element> {
        let src = self.video.as_ref()?;
        Some(
            Element::block()
                .height(MEDIA_HEIGHT)
                .clip()
                .child(Element::new(ElementKind::Video {
                    src: src.clone(),
                    autoplay: true,
                    looped: true,
                    muted: true,
                    inline: true,
                })),
        )
    }

    fn body(&self) -> Element {
        let header = Element::block()
            .child(Element::new(ElementKind::Heading(self.title.clone())))
            .child_opt(self.dates.clone().map(Element::text));

        let tags = (!self.tags.is_empty()).then(|| {
            Element::block().children(self.tags.iter().map(|tag| {
                Element::inline()
                    .motion(badge_motion(0.0))
                    .child(Element::new(ElementKind::Badge(tag.clone())))
            }))
        });

        let links = (!self.links.is_empty()).then(|| {
            Element::block().children(self.links.iter().map(|link| {
                Element::inline().motion(badge_motion(LINK_LIFT)).child(
                    Element::new(ElementKind::Link {
                        href: link.url.clone(),
                        new_tab: true,
                        rel: Some(LINK_REL.to_string()),
                    })
                    .child(Element::text(link.name.clone())),
                )
            }))
        });

        Element::block()
            .child(header)
            .child(Element::text(self.description.clone()))
            .child_opt(tags)
            .child_opt(links)
    }
}

fn badge_motion(lift: f32) -> MotionProps {
    MotionProps {
        hover: Some(badge_visual(InteractionState::Hovered, lift)),
        tap: Some(badge_visual(InteractionState::Pressed, lift)),
        transition: Some(Transition::spring(BADGE_SPRING)),
        ..Default::default()
    }
}

fn accent_bar() -> Element {
    Element::block()
        .height(ACCENT_HEIGHT)
        .background(Background::Gradient(vec![
            ColorToken::Blue.color(),
            ColorToken::Purple.color(),
            ColorToken::Pink.color(),
        ]))
        .motion(MotionProps {
            initial: Some(VisualState::IDENTITY.width(0.0)),
            group_hover: Some(VisualState::IDENTITY),
            transition: Some(CardPart::AccentBar.transition()),
            ..Default::default()
        })
}
