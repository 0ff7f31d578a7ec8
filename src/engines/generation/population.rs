use crate::engines::evaluation::Score;
use crate::engines::generation::organism::Organism;

/// Where an inserted child ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Took the first empty slot.
    Filled(usize),
    /// Replaced the occupant of this slot, which is dropped.
    Displaced(usize),
    /// Beat nobody; the child is dropped.
    Rejected,
}

/// Fixed number of slots, each empty or owning one organism.
#[derive(Debug, Clone)]
pub struct Population {
    slots: Vec<Option<Organism>>,
}

impl Population {
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// Population with `organism` in the first slot.
    pub fn seeded(size: usize, organism: Organism) -> Self {
        let mut population = Self::new(size);
        population.insert(organism);
        population
    }

    /// Fill-then-displace insertion.
    ///
    /// An empty slot (lowest index first) always takes the child. Once the
    /// population is full, the child replaces the first occupant, by slot
    /// index, whose score it strictly exceeds. That is not necessarily the
    /// weakest occupant.
    pub fn insert(&mut self, child: Organism) -> Placement {
        if let Some(slot) = self.slots.iter().position(Option::is_none) {
            self.slots[slot] = Some(child);
            return Placement::Filled(slot);
        }

        let beaten = self
            .slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|occupant| child.beats(occupant)));

        match beaten {
            Some(slot) => {
                self.slots[slot] = Some(child);
                Placement::Displaced(slot)
            }
            None => Placement::Rejected,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn get(&self, slot: usize) -> Option<&Organism> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn slots(&self) -> &[Option<Organism>] {
        &self.slots
    }

    /// Occupied slots with their index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Organism)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|o| (i, o)))
    }

    pub fn total_score(&self) -> Score {
        self.iter().map(|(_, o)| o.score()).sum()
    }

    /// Highest-scoring occupant; the lowest slot wins ties.
    pub fn best(&self) -> Option<&Organism> {
        self.iter()
            .map(|(_, o)| o)
            .fold(None, |best: Option<&Organism>, o| match best {
                Some(b) if !o.beats(b) => Some(b),
                _ => Some(o),
            })
    }
}
