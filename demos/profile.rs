use criterion::black_box;
use rand::Rng;
use structopt::StructOpt;

use dictlookup::config::BenchConfig;
use dictlookup::dataset::{generate, sort_by_quality};
use dictlookup::index::RecordIndex;
use dictlookup::linear::find_by_id;
use dictlookup::random::seeded;

#[derive(StructOpt)]
struct Profile {
    #[structopt(short = "s", long = "size", default_value = "500000")]
    size: usize,
    #[structopt(short = "i", long = "iters")]
    iters: usize,
    #[structopt(subcommand)]
    ty: Ty,
}

#[derive(StructOpt)]
enum Ty {
    #[structopt(name = "linear")]
    Linear,
    #[structopt(name = "index")]
    Index,
    #[structopt(name = "build")]
    Build,
}

fn main() {
    let profile = Profile::from_args();
    let config = BenchConfig {
        record_count: profile.size,
        ..BenchConfig::default()
    };
    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        std::process::exit(2);
    }

    let mut rng = seeded(config.seed);
    let mut records = generate(&config, &mut rng);
    sort_by_quality(&mut records);
    let n = profile.size as u32;

    match profile.ty {
        Ty::Linear => {
            dbg!("PROFILING");
            for _ in 0..profile.iters {
                black_box(find_by_id(&records, rng.gen_range(0, n)));
            }
        }
        Ty::Index => {
            let index = RecordIndex::build(&records);

            dbg!("PROFILING");
            for _ in 0..profile.iters {
                black_box(index.get(rng.gen_range(0, n)));
            }
        }
        Ty::Build => {
            dbg!("PROFILING");
            for _ in 0..profile.iters {
                black_box(RecordIndex::build(&records));
            }
        }
    }
}
