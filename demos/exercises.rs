// ============================================================================
// Geometry Exercises Example
// ============================================================================

use decimal_vector::prelude::*;

fn main() -> Result<(), VectorError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Decimal Vector Exercises ===\n");

    let v = Vector::new([5, 3, -2])?;
    let w = Vector::new([-1, 0, 3])?;
    println!("Cross product of {} and {}: {}", v, w, v.cross_product(&w)?);
    println!("Area of parallelogram: {:.3}\n", v.area_of_parallelogram(&w)?);

    let v = Vector::new(["8.462", "7.893", "-8.187"])?;
    let w = Vector::new(["6.984", "-5.975", "4.778"])?;
    println!("Cross product of v and w: {}", v.cross_product(&w)?);

    let v = Vector::new(["-8.987", "-9.838", "5.031"])?;
    let w = Vector::new(["-4.268", "-1.861", "-8.866"])?;
    println!("Area of parallelogram: {:.3}", v.area_of_parallelogram(&w)?);

    let v = Vector::new(["1.5", "9.547", "3.691"])?;
    let w = Vector::new(["-6.007", "0.124", "5.772"])?;
    println!("Area of triangle: {:.3}\n", v.area_of_triangle(&w)?);

    // Decomposition
    let v = Vector::new(["3.039", "1.879"])?;
    let basis = Vector::new(["0.825", "2.036"])?;
    println!("Parallel component: {}", v.component_parallel_to(&basis)?);
    println!("Orthogonal component: {}\n", v.component_orthogonal_to(&basis)?);

    // Angles
    let v = Vector::new(["3.183", "-7.627"])?;
    let w = Vector::new(["-2.668", "5.319"])?;
    println!("Angle (radians): {:.3}", v.angle_with(&w, AngleUnit::Radians)?);
    println!("Parallel: {}", v.is_parallel_to(&w)?);
    println!("Orthogonal: {}\n", v.is_orthogonal_to(&w)?);

    // Errors surface with the message of the failing operation
    let zero = Vector::new([0, 0])?;
    if let Err(e) = v.component_orthogonal_to(&zero) {
        println!("Expected failure: {}", e);
    }
    if let Err(e) = "7".parse::<Vector>() {
        println!("Expected failure: {}", e);
    }

    // Same coordinates under full decimal precision
    let precise = v.in_context(DecimalContext::high_precision());
    println!("\nNormalized (3 digits):  {}", v.normalized()?);
    println!("Normalized (28 digits): {}", precise.normalized()?);

    Ok(())
}
