//! Writing instruments.
//!
//! Only the instruments below have a geometry model. Any other pen id,
//! including the brush, tilt pencil and marker of the device, is reported as
//! unsupported and not drawn.
//!
//! | Tool         | Pressure | Tilt | Brush  |
//! |--------------|----------|------|--------|
//! | Ballpoint    | Y        | N    | N      |
//! | Fineliner    | N        | N    | N      |
//! | Sharp pencil | N        | N    | pencil |
//! | Highlighter  | N        | N    | N      |
//! | Eraser       | N        | N    | N      |
//! | Erase area   | N        | N    | N      |

/// Writing instrument with a known physical model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Pen {
    Ballpoint,
    Fineliner,
    Highlighter,
    Eraser,
    SharpPencil,
    EraseArea,
}

impl Pen {
    pub const ALL: [Pen; 6] = [
        Pen::Ballpoint,
        Pen::Fineliner,
        Pen::Highlighter,
        Pen::Eraser,
        Pen::SharpPencil,
        Pen::EraseArea,
    ];

    /// Look up a pen by the id stored in a stroke.
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            2 => Some(Pen::Ballpoint),
            4 => Some(Pen::Fineliner),
            5 => Some(Pen::Highlighter),
            6 => Some(Pen::Eraser),
            7 => Some(Pen::SharpPencil),
            8 => Some(Pen::EraseArea),
            _ => None,
        }
    }

    pub fn id(self) -> u32 {
        match self {
            Pen::Ballpoint => 2,
            Pen::Fineliner => 4,
            Pen::Highlighter => 5,
            Pen::Eraser => 6,
            Pen::SharpPencil => 7,
            Pen::EraseArea => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pen::Ballpoint => "ballpoint",
            Pen::Fineliner => "fineliner",
            Pen::Highlighter => "highlighter",
            Pen::Eraser => "eraser",
            Pen::SharpPencil => "sharp pencil",
            Pen::EraseArea => "erase area",
        }
    }
}

/// Name of the device instrument for a pen id, if the id is known at all.
pub fn instrument_name(id: u32) -> Option<&'static str> {
    match id {
        0 => Some("brush"),
        1 => Some("tilt pencil"),
        3 => Some("marker"),
        _ => Pen::from_id(id).map(Pen::name),
    }
}
