pub mod d400_salon_summary;
