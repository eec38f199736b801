#![allow(dead_code)]

use set_outlines::{Rect, SetOutline, Vector2};
use std::{cell::RefCell, convert::Infallible};

/// Install a test subscriber once so `RUST_LOG=set_outlines=trace` shows pipeline logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Members and non-members received by one outline generator call.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineCall {
    pub members: Vec<Rect>,
    pub non_members: Vec<Rect>,
}

/// Outline generator recording every call, returns the member centers as the outline.
#[derive(Debug, Default)]
pub struct RecordingOutline {
    pub calls: RefCell<Vec<OutlineCall>>,
}

impl RecordingOutline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<OutlineCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl SetOutline for RecordingOutline {
    type Error = Infallible;

    fn create_outline(
        &self,
        members: &[Rect],
        non_members: &[Rect],
    ) -> Result<Vec<Vector2>, Self::Error> {
        self.calls.borrow_mut().push(OutlineCall {
            members: members.to_vec(),
            non_members: non_members.to_vec(),
        });
        Ok(members.iter().map(|r| r.center()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("no outline for {member_count} members")]
pub struct OutlineFailure {
    pub member_count: usize,
}

/// Outline generator failing whenever it sees more than `max_members` members.
#[derive(Debug)]
pub struct FailingOutline {
    pub max_members: usize,
}

impl SetOutline for FailingOutline {
    type Error = OutlineFailure;

    fn create_outline(
        &self,
        members: &[Rect],
        _non_members: &[Rect],
    ) -> Result<Vec<Vector2>, Self::Error> {
        if members.len() > self.max_members {
            return Err(OutlineFailure {
                member_count: members.len(),
            });
        }
        Ok(members.iter().map(|r| r.center()).collect())
    }
}

/// Converter keeping the raw outline points as the shape.
pub fn points_shape(points: &[Vector2]) -> Vec<Vector2> {
    points.to_vec()
}

pub fn r(min_x: f64, min_y: f64, width: f64, height: f64) -> Rect {
    Rect::new(min_x, min_y, width, height)
}
