use std::path::{Path, PathBuf};

use anyhow::Error;
use regex::Regex;
use record_merger::merge::Merge;

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn merge_unsorted(inputs: &[PathBuf], output_path: &Path) -> Result<(), Error> {
    // rows keep the input order when no sort directive is given
    let mut merge = Merge::new(inputs.to_vec());
    merge.with_output(output_path.to_path_buf());
    merge.merge()?;
    Ok(())
}

fn merge_by_color_and_name(inputs: &[PathBuf], output_path: &Path) -> Result<(), Error> {
    let mut merge = Merge::new(inputs.to_vec());
    merge.add_sort("FavoriteColor:asc".to_string());
    merge.add_sort("LastName:asc".to_string());
    merge.with_output(output_path.to_path_buf());
    merge.merge()?;
    Ok(())
}

fn merge_by_birth_date(inputs: &[PathBuf], output_path: &Path) -> Result<(), Error> {
    let mut merge = Merge::new(inputs.to_vec());
    merge.add_sort("DateOfBirth:desc".to_string());
    merge.with_output(output_path.to_path_buf());
    merge.merge()?;
    Ok(())
}

fn merge_skipping_comments(input: &Path, output_path: &Path) -> Result<(), Error> {
    let mut merge = Merge::new(vec![input.to_path_buf()]);
    merge.add_sort("DateOfBirth".to_string());
    merge.with_ignore_lines(Regex::new("^#")?);
    merge.with_output(output_path.to_path_buf());
    merge.merge()?;
    Ok(())
}

// cargo run -r --example merge_records
pub fn main() -> Result<(), Error> {
    let inputs = vec![
        PathBuf::from("./tests/fixtures/input1"),
        PathBuf::from("./tests/fixtures/input2"),
        PathBuf::from("./tests/fixtures/input3"),
    ];

    merge_unsorted(&inputs, &PathBuf::from("./target/merged.csv"))?;
    merge_by_color_and_name(&inputs, &PathBuf::from("./target/merged-by-color.csv"))?;
    merge_by_birth_date(&inputs, &PathBuf::from("./target/merged-by-birth-date.csv"))?;
    merge_skipping_comments(
        &PathBuf::from("./tests/fixtures/mixed"),
        &PathBuf::from("./target/merged-mixed.csv"),
    )?;

    Ok(())
}
