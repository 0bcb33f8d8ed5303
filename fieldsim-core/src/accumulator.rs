//! Per-body force collections

use crate::force::Force;

/// Ordered list of forces owned by one body, holding at most one force per id
#[derive(Debug, Clone, Default)]
pub struct ForceAccumulator {
    forces: Vec<Force>,
}

impl ForceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.forces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Force> {
        self.forces.iter()
    }

    /// Drop every force whose magnitude is exactly zero
    pub fn prune(&mut self) {
        self.forces.retain(|f| !f.is_zero());
    }

    /// Left fold of [`Force::resultant`] over the members in storage order
    pub fn net_force(&self) -> Force {
        self.forces
            .iter()
            .fold(Force::zero("", ""), |net, f| Force::resultant(&net, f))
    }

    /// Scale the magnitude of every force of `class` by `factor`.
    ///
    /// `None` or an empty class applies to all members.
    pub fn apply_damping(&mut self, factor: f64, class: Option<&str>) {
        let filter = class.filter(|c| !c.is_empty());
        for force in self.forces.iter_mut() {
            if filter.map_or(true, |c| force.class == c) {
                force.magnitude *= factor;
            }
        }
    }

    /// Insert `force`, or overwrite direction and magnitude of the member with
    /// the same id. Returns the stored force.
    pub fn upsert(&mut self, force: Force) -> &mut Force {
        match self.forces.iter().position(|f| f.id == force.id) {
            Some(idx) => {
                let existing = &mut self.forces[idx];
                existing.copy_from(&force);
                existing
            }
            None => {
                self.forces.push(force);
                let last = self.forces.len() - 1;
                &mut self.forces[last]
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Force> {
        let idx = self.forces.iter().position(|f| f.id == id)?;
        Some(self.forces.remove(idx))
    }

    pub fn get(&self, id: &str) -> Option<&Force> {
        self.forces.iter().find(|f| f.id == id)
    }
}
