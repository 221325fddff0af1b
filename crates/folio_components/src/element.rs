//! Element tree produced by components
//!
//! A minimal description of the markup a component renders: element kinds,
//! the few style properties the components rely on, and the motion props
//! the host's animation engine should honor. Layout and painting belong to
//! the host.

use folio_animation::{Orchestration, Transition, ViewportOptions, VisualState};
use folio_core::Color;

/// What an element is
#[derive(Clone, Debug, PartialEq)]
pub enum ElementKind {
    /// Block container
    Block,
    /// Inline-block container (text units, badges wrappers)
    Inline,
    /// Plain text run
    Text(String),
    /// Card title
    Heading(String),
    Image {
        src: String,
        alt: String,
    },
    Video {
        src: String,
        autoplay: bool,
        looped: bool,
        muted: bool,
        inline: bool,
    },
    /// Navigable link wrapping its children
    Link {
        href: String,
        new_tab: bool,
        rel: Option<String>,
    },
    /// Outline badge with a label
    Badge(String),
}

/// Background fill
#[derive(Clone, Debug, PartialEq)]
pub enum Background {
    Solid(Color),
    /// Left-to-right gradient through the given stops
    Gradient(Vec<Color>),
}

/// Style properties the components set explicitly
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub background: Option<Background>,
    /// Fixed height in layout units
    pub height: Option<f32>,
    pub margin_right: f32,
    /// 3D perspective distance for children
    pub perspective: Option<f32>,
    pub preserve_3d: bool,
    /// Clip overflowing children
    pub clip: bool,
    /// Keep text on one line
    pub nowrap: bool,
}

/// Motion parameters attached to an element
///
/// Mirrors the props a declarative motion runtime takes: a starting state,
/// states for viewport/hover/press triggers, and the timing to reach them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionProps {
    /// State before any trigger fires
    pub initial: Option<VisualState>,
    /// Target once the element enters the viewport
    pub in_view: Option<VisualState>,
    /// Target while the pointer is over the element
    pub hover: Option<VisualState>,
    /// Target while the element is pressed
    pub tap: Option<VisualState>,
    /// Target while the enclosing card is hovered
    pub group_hover: Option<VisualState>,
    pub transition: Option<Transition>,
    pub viewport: Option<ViewportOptions>,
    /// Stagger timing applied to animated children
    pub orchestration: Option<Orchestration>,
}

/// A node in a component's rendered tree
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub class: Option<String>,
    pub style: Style,
    pub motion: Option<MotionProps>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            class: None,
            style: Style::default(),
            motion: None,
            children: Vec::new(),
        }
    }

    pub fn block() -> Self {
        Self::new(ElementKind::Block)
    }

    pub fn inline() -> Self {
        Self::new(ElementKind::Inline)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(ElementKind::Text(content.into()))
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a child only when present
    pub fn child_opt(mut self, child: Option<Element>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    pub fn class_opt(mut self, class: Option<String>) -> Self {
        self.class = class;
        self
    }

    pub fn motion(mut self, motion: MotionProps) -> Self {
        self.motion = Some(motion);
        self
    }

    pub fn background(mut self, background: Background) -> Self {
        self.style.background = Some(background);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.style.height = Some(height);
        self
    }

    pub fn margin_right(mut self, margin: f32) -> Self {
        self.style.margin_right = margin;
        self
    }

    pub fn perspective(mut self, distance: f32) -> Self {
        self.style.perspective = Some(distance);
        self
    }

    pub fn preserve_3d(mut self) -> Self {
        self.style.preserve_3d = true;
        self
    }

    pub fn clip(mut self) -> Self {
        self.style.clip = true;
        self
    }

    pub fn nowrap(mut self) -> Self {
        self.style.nowrap = true;
        self
    }

    /// Depth-first iterator over this element and all descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First element in depth-first order matching the predicate
    pub fn find(&self, mut predicate: impl FnMut(&Element) -> bool) -> Option<&Element> {
        self.descendants().find(|e| predicate(e))
    }

    /// Concatenated text of all text-bearing descendants
    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(|e| match &e.kind {
                ElementKind::Text(s) | ElementKind::Heading(s) | ElementKind::Badge(s) => {
                    Some(s.as_str())
                }
                _ => None,
            })
            .collect()
    }
}

/// Iterator returned by [`Element::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}
