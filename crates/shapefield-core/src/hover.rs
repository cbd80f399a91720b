use glam::Vec3;
use smallvec::SmallVec;

/// Distance along the ray to the first hit with the sphere, if in front.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(usize),
    Leave(usize),
}

pub type HoverEvents = SmallVec<[HoverEvent; 2]>;

/// Turns successive pick results into enter/leave transitions.
/// At most one shape is hovered at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverTracker {
    current: Option<usize>,
}

impl HoverTracker {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn update(&mut self, picked: Option<usize>) -> HoverEvents {
        let mut events = HoverEvents::new();
        if picked == self.current {
            return events;
        }
        if let Some(prev) = self.current {
            events.push(HoverEvent::Leave(prev));
        }
        if let Some(next) = picked {
            events.push(HoverEvent::Enter(next));
        }
        self.current = picked;
        events
    }

    /// Pointer left the canvas.
    pub fn clear(&mut self) -> HoverEvents {
        self.update(None)
    }
}
