use argh::FromArgs;
use kornia_transform::{Matrix, MatrixTransformExt, Vec2, Vec3};

#[derive(FromArgs)]
/// Translate a point with a homogeneous transform
struct Args {
    /// translation along x
    #[argh(option, default = "0.0")]
    x: f64,

    /// translation along y
    #[argh(option, default = "0.0")]
    y: f64,

    /// translation along z, switches to 3D (4x4) transforms when given
    #[argh(option)]
    z: Option<f64>,

    /// point to transform as comma separated coordinates, e.g. 1,2 or 1,2,3
    #[argh(option, default = "String::from(\"0,0,0\")")]
    point: String,
}

fn parse_point(point: &str) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    point
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(Into::into))
        .collect()
}

fn print_matrix(name: &str, matrix: &faer::Mat<f64>) {
    let size = Matrix::size(matrix);
    println!("{name} ({size}):");
    for row in matrix.flatten().chunks(size.width) {
        println!("  {row:?}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let coords = parse_point(&args.point)?;
    let get = |i: usize| coords.get(i).copied().unwrap_or(0.0);

    let (model, point) = match args.z {
        Some(z) => {
            let model = <faer::Mat<f64> as Matrix>::identity(4)
                .translate(Vec3::new(args.x, args.y, z))?;
            let point = model.multiply_by_vector(Vec3::new(get(0), get(1), get(2)))?;
            (model, point)
        }
        None => {
            let model = <faer::Mat<f64> as Matrix>::identity(3)
                .translate(Vec2::new(args.x, args.y))?;
            let point = model.multiply_by_vector(Vec2::new(get(0), get(1)))?;
            (model, point)
        }
    };
    log::debug!("model matrix: {:?}", model.flatten());

    print_matrix("model", &model);
    print_matrix("point", &point);

    Ok(())
}
