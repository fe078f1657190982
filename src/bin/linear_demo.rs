use log::info;

use rust_linear::{LowerTriangular, Matrix, Result, Unit, UpperTriangular};

fn main() -> Result<()> {
    env_logger::init();

    let a = Matrix::<i32>::from_list(vec![vec![6, 7, 2], vec![4, 6, 8], vec![90, 13, 3]])?;
    let b = Matrix::from_list(vec![vec![1, 2, 1], vec![1, 1, 1], vec![1, 1, 1]])?;

    let lower = LowerTriangular::from_list(vec![
        vec![1, 0, 0],
        vec![0, 5, 0],
        vec![0, 0, 9],
        vec![10, 11, 12],
    ])?;
    println!("{lower}");

    if let Err(err) = UpperTriangular::<i32>::from_list(lower.to_list()) {
        println!("upper triangular rejected: {err}");
    }

    println!("{}", (&a - &b)?);
    let lhs = Matrix::from_list(vec![vec![1, 4], vec![2, 5], vec![3, 6]])?;
    let rhs = Matrix::from_list(vec![vec![7, 8, 9], vec![10, 11, 12]])?;
    println!("{}", lhs.dot(&rhs)?);
    println!("{}", (&a * &b)?);
    println!("{}", 2 * &a);

    println!("{}", Unit::<f64>::new(10).determinant()?);
    println!("{}", a.determinant()?);

    let zeros = Matrix::<i32>::new(5, 5);
    let square = Matrix::<i32>::square(10);
    let default = Matrix::<i32>::default();
    info!("zero matrices: {:?} {:?}", zeros.size(), square.size());
    println!("{} {}", zeros.size().0, zeros.size().1);
    println!("{}", a.transpose());
    println!("{default}");
    println!("{} {}", default.size().0, default.size().1);

    Ok(())
}
