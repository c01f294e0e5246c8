use std::fmt;

use anyhow::{Result, bail};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    At,
    Available,
    Has,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::At => "At",
            Kind::Available => "Available",
            Kind::Has => "Has",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    pub kind: Kind,
    pub object: String,
    pub time: usize,
}

impl Atom {
    pub fn new(kind: Kind, object: impl Into<String>, time: usize) -> Self {
        Self {
            kind,
            object: object.into(),
            time,
        }
    }

    pub fn at(object: impl Into<String>, time: usize) -> Self {
        Self::new(Kind::At, object, time)
    }

    pub fn available(object: impl Into<String>, time: usize) -> Self {
        Self::new(Kind::Available, object, time)
    }

    pub fn has(object: impl Into<String>, time: usize) -> Self {
        Self::new(Kind::Has, object, time)
    }

    pub fn parse(s: &str) -> Result<Self> {
        let open = s
            .find('(')
            .ok_or_else(|| anyhow::anyhow!("missing '(' in atom '{}'", s))?;
        if !s.ends_with(')') {
            bail!("missing ')' in atom '{}'", s);
        }
        let kind = match &s[..open] {
            "At" => Kind::At,
            "Available" => Kind::Available,
            "Has" => Kind::Has,
            other => bail!("unknown atom kind '{}'", other),
        };
        let body = &s[open + 1..s.len() - 1];
        let comma = body
            .rfind(',')
            .ok_or_else(|| anyhow::anyhow!("missing ',' in atom '{}'", s))?;
        let object = &body[..comma];
        if object.is_empty() {
            bail!("empty object in atom '{}'", s);
        }
        let time = body[comma + 1..]
            .parse::<usize>()
            .map_err(|_| anyhow::anyhow!("bad time step in atom '{}'", s))?;
        Ok(Self::new(kind, object, time))
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.kind.as_str(), self.object, self.time)
    }
}

// Bijection between atoms and dense 1-based ids. Ids follow enumeration
// order: every At atom (by declared location, then time), then every
// Available, then every Has (by declared treasure, then time).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomRegistry {
    ids: IndexMap<Atom, u32>,
}

impl AtomRegistry {
    pub fn enumerate(locations: &[String], treasures: &[String], moves: usize) -> Self {
        let mut reg = Self::default();
        for loc in locations {
            for i in 0..=moves {
                reg.insert(Atom::at(loc.clone(), i));
            }
        }
        for t in treasures {
            for i in 0..=moves {
                reg.insert(Atom::available(t.clone(), i));
            }
        }
        for t in treasures {
            for i in 0..=moves {
                reg.insert(Atom::has(t.clone(), i));
            }
        }
        reg
    }

    pub(crate) fn insert(&mut self, atom: Atom) -> u32 {
        let next = self.ids.len() as u32 + 1;
        *self.ids.entry(atom).or_insert(next)
    }

    pub fn id_of(&self, atom: &Atom) -> Option<u32> {
        self.ids.get(atom).copied()
    }

    pub fn atom_of(&self, id: u32) -> Option<&Atom> {
        if id == 0 {
            return None;
        }
        self.ids.get_index(id as usize - 1).map(|(atom, _)| atom)
    }

    pub fn count(&self) -> u32 {
        self.ids.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Atom, u32)> {
        self.ids.iter().map(|(atom, &id)| (atom, id))
    }
}
