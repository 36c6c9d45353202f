pub mod braille;
pub mod brush;
pub mod frame;
pub mod graphics;
pub mod image;
pub mod raster;
pub mod rect;
pub mod subcell;

pub use brush::{LineBrush, LinePen, PointBrush, PointPen};
pub use frame::{encode_image, print_image, write_image};
pub use graphics::{Graphics, TextDirection};
pub use image::{Cell, Image};
pub use rect::{Point, Rectangle};
pub use subcell::SubCellGraphics;
