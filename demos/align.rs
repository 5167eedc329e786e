//! Example: distance matrices of a few small pairs.
//!
//! Run with:
//! `cargo run --example align`
//!
//! Prints the full wavefront-filled matrix for GATTACA / GCATGCU under unit
//! costs, then the same pair under a nucleotide cost table.

use wavefront_nw::{
    models::{CostTable, UnitCost},
    AlignmentEngine, DistanceMatrix, Result,
};

fn main() -> Result<()> {
    let s = b"GATTACA";
    let t = b"GCATGCU";

    let matrix = AlignmentEngine::new(UnitCost).fill_matrix(s, t)?;
    println!("Unit-cost distance: {}", matrix.last());
    print_matrix(s, t, &matrix);

    // Transitions cost 1, transversions 2, gaps 2.
    let table = CostTable::transition_transversion(1, 2, 2);
    let weighted = AlignmentEngine::new(table).distance(s, t)?;
    println!("Transition/transversion distance: {weighted}");

    Ok(())
}

/// Render the matrix with `b` along the top and `a` down the side.
fn print_matrix(a: &[u8], b: &[u8], matrix: &DistanceMatrix) {
    print!("      ");
    for &y in b {
        print!("{:>3}", y as char);
    }
    println!();
    for i in 0..matrix.rows() {
        let label = if i == 0 { ' ' } else { a[i - 1] as char };
        print!("  {label}");
        for value in matrix.row(i) {
            print!("{value:>3}");
        }
        println!();
    }
}
