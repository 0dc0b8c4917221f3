//! Testing utilities for the fixcraft workspace
//!
//! Shared test types and fixture helpers. The widget hierarchy declares
//! ancestry and interfaces through descriptors: `Button` extends
//! `Control` extends `Component`, `Slider` is a sibling under `Control`,
//! and `Tag` is unrelated.

#![allow(missing_docs)]

use std::sync::atomic::{AtomicU32, Ordering};

use fixcraft_fixture::Fixture;
use fixcraft_kernel::{ResolveContext, SpecimenType, TypeDescriptor};

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Monotonic id so generated instances are distinguishable
pub fn next_id() -> u32 {
    NEXT_ID.fetch_add(1, Ordering::SeqCst)
}

pub trait Clickable: Send + Sync {
    fn click(&self) -> u32;
}

pub trait Renderable: Send + Sync {
    fn render(&self) -> String;
}

#[derive(Debug)]
pub struct Component {
    pub id: u32,
}

#[derive(Debug)]
pub struct Control {
    pub id: u32,
}

#[derive(Debug)]
pub struct Button {
    pub id: u32,
    pub label: String,
}

#[derive(Debug)]
pub struct Slider {
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl SpecimenType for Component {}

impl SpecimenType for Control {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Control>().extends::<Component>()
    }
}

impl SpecimenType for Button {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Button>()
            .extends::<Control>()
            .implements::<dyn Clickable>()
            .implements::<dyn Renderable>()
    }
}

impl SpecimenType for Slider {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Slider>().extends::<Control>()
    }
}

impl SpecimenType for Tag {}

impl Clickable for Button {
    fn click(&self) -> u32 {
        self.id
    }
}

impl Renderable for Button {
    fn render(&self) -> String {
        format!("[{}]", self.label)
    }
}

/// Fixture with factories for the whole widget hierarchy registered
pub fn sample_fixture() -> Fixture {
    let mut fixture = Fixture::new();
    fixture.provide(|_| Ok(Component { id: next_id() }));
    fixture.provide(|_| Ok(Control { id: next_id() }));
    fixture.provide(|ctx: &ResolveContext<'_>| {
        Ok(Button {
            id: next_id(),
            label: ctx.create::<String>()?.as_ref().clone(),
        })
    });
    fixture.provide(|_| Ok(Slider { id: next_id() }));
    fixture.provide(|ctx: &ResolveContext<'_>| {
        Ok(Tag {
            name: ctx.create::<String>()?.as_ref().clone(),
        })
    });
    fixture
}
