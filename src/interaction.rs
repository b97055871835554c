//! interaction.rs
//!
//! "Pointer went down outside region R" detection, shared by every mounted
//! search widget.
//!
//! The platform layer reports pointer presses with [`InteractionHub::pointer_down`];
//! each registered widget whose root region does not contain the point gets a
//! `WidgetEvent::OutsideInteraction`. Registration is tied to a guard so a
//! widget that unmounts can't leave its listener behind.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::debug;
use uuid::Uuid;

use crate::types::WidgetEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Axis-aligned screen rectangle covering a widget (input box + panel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }
}

#[derive(Debug)]
struct Listener {
    region: Region,
    // Weak so a registration never keeps the widget's event channel open.
    tx: mpsc::WeakSender<WidgetEvent>,
}

#[derive(Clone, Debug, Default)]
pub struct InteractionHub {
    listeners: Arc<DashMap<Uuid, Listener>>,
}

impl InteractionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching for presses outside `region` on behalf of widget `id`.
    /// Dropping the returned guard deregisters it.
    pub fn register(
        &self,
        id: Uuid,
        region: Region,
        tx: &mpsc::Sender<WidgetEvent>,
    ) -> ListenerGuard {
        self.listeners.insert(
            id,
            Listener {
                region,
                tx: tx.downgrade(),
            },
        );
        debug!(widget = %id, "outside-interaction listener registered");
        ListenerGuard {
            id,
            listeners: self.listeners.clone(),
        }
    }

    /// Report a pointer press. Returns how many widgets were told it was outside them.
    pub fn pointer_down(&self, at: Point) -> usize {
        let mut notified = 0;
        for item in self.listeners.iter() {
            if item.value().region.contains(at) {
                continue;
            }
            let Some(tx) = item.value().tx.upgrade() else {
                continue;
            };
            let id = *item.key();
            match tx.try_send(WidgetEvent::OutsideInteraction) {
                Ok(()) => notified += 1,
                // Queue full: deliver once the widget drains it.
                Err(TrySendError::Full(event)) => match Handle::try_current() {
                    Ok(rt) => {
                        debug!(widget = %id, "event queue full, outside interaction deferred");
                        rt.spawn(async move {
                            if tx.send(event).await.is_err() {
                                debug!(widget = %id, "widget gone before deferred outside interaction");
                            }
                        });
                        notified += 1;
                    }
                    Err(_) => {
                        debug!(widget = %id, "event queue full and no runtime, outside interaction dropped");
                    }
                },
                Err(TrySendError::Closed(_)) => {
                    debug!(widget = %id, "widget event queue closed, outside interaction skipped");
                }
            }
        }
        notified
    }

    pub fn is_registered(&self, id: Uuid) -> bool {
        self.listeners.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Keeps a widget's listener registered for as long as it lives.
#[derive(Debug)]
pub struct ListenerGuard {
    id: Uuid,
    listeners: Arc<DashMap<Uuid, Listener>>,
}

impl ListenerGuard {
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.listeners.remove(&self.id);
        debug!(widget = %self.id, "outside-interaction listener removed");
    }
}
