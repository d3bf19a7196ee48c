use std::fs;

use regex::Regex;
use record_merger::merge::Merge;

mod common;

fn merge_csv(names: &[&str], sort: &[&str]) -> Result<String, anyhow::Error> {
    let mut merge = Merge::new(common::fixtures(names));
    merge.with_sort(sort.iter().map(|directive| directive.to_string()).collect());
    merge.with_endl("\n");
    Ok(merge.to_csv()?)
}

fn expected(rows: &[&str]) -> String {
    let mut lines = vec![common::HEADER];
    lines.extend_from_slice(rows);
    lines.join("\n")
}

#[test]
fn test_single_row_no_sort() -> Result<(), anyhow::Error> {
    let csv = merge_csv(&["single"], &[])?;
    assert_eq!(csv, expected(&["Smith,John,johnsmith@example.com,Blue,1/1/1990"]));
    Ok(())
}

#[test]
fn test_one_file() -> Result<(), anyhow::Error> {
    let csv = merge_csv(&["input1"], &[])?;
    assert_eq!(
        csv,
        expected(&[
            "Smith,John,johnsmith@example.com,Blue,1/1/1990",
            "Smith,Jane,janesmith@example.com,Green,2/2/1990",
        ])
    );
    Ok(())
}

#[test]
fn test_no_sort_keeps_merge_order() -> Result<(), anyhow::Error> {
    let csv = merge_csv(&["input1", "input2", "input3"], &[])?;
    assert_eq!(
        csv,
        expected(&[
            "Smith,John,johnsmith@example.com,Blue,1/1/1990",
            "Smith,Jane,janesmith@example.com,Green,2/2/1990",
            "Miller,Mike,mikemiller@example.com,Red,5/5/1993",
            "Miller,Jessica,jessicamiller@example.com,Blue,3/3/1989",
            "Williams,Nick,nickwilliams@example.com,Purple,12/12/1985",
            "Davis,John,johndavis@example.com,Teal,11/1/1986",
        ])
    );
    Ok(())
}

#[test]
fn test_favorite_color_asc_last_name_asc() -> Result<(), anyhow::Error> {
    let csv = merge_csv(&["input1", "input2", "input3"], &["FavoriteColor:asc", "LastName:asc"])?;
    assert_eq!(
        csv,
        expected(&[
            "Miller,Jessica,jessicamiller@example.com,Blue,3/3/1989",
            "Smith,John,johnsmith@example.com,Blue,1/1/1990",
            "Smith,Jane,janesmith@example.com,Green,2/2/1990",
            "Williams,Nick,nickwilliams@example.com,Purple,12/12/1985",
            "Miller,Mike,mikemiller@example.com,Red,5/5/1993",
            "Davis,John,johndavis@example.com,Teal,11/1/1986",
        ])
    );
    Ok(())
}

#[test]
fn test_date_of_birth_asc() -> Result<(), anyhow::Error> {
    let csv = merge_csv(&["input1", "input2", "input3"], &["DateOfBirth:asc"])?;
    assert_eq!(
        csv,
        expected(&[
            "Williams,Nick,nickwilliams@example.com,Purple,12/12/1985",
            "Davis,John,johndavis@example.com,Teal,11/1/1986",
            "Miller,Jessica,jessicamiller@example.com,Blue,3/3/1989",
            "Smith,John,johnsmith@example.com,Blue,1/1/1990",
            "Smith,Jane,janesmith@example.com,Green,2/2/1990",
            "Miller,Mike,mikemiller@example.com,Red,5/5/1993",
        ])
    );
    Ok(())
}

#[test]
fn test_last_name_desc_is_stable() -> Result<(), anyhow::Error> {
    let csv = merge_csv(&["input1", "input2", "input3"], &["LastName:desc"])?;
    assert_eq!(
        csv,
        expected(&[
            "Williams,Nick,nickwilliams@example.com,Purple,12/12/1985",
            "Smith,John,johnsmith@example.com,Blue,1/1/1990",
            "Smith,Jane,janesmith@example.com,Green,2/2/1990",
            "Miller,Mike,mikemiller@example.com,Red,5/5/1993",
            "Miller,Jessica,jessicamiller@example.com,Blue,3/3/1989",
            "Davis,John,johndavis@example.com,Teal,11/1/1986",
        ])
    );
    Ok(())
}

#[test]
fn test_direction_defaults_to_asc_and_ignores_case() -> Result<(), anyhow::Error> {
    let implicit = merge_csv(&["input1", "input2", "input3"], &["DateOfBirth"])?;
    let explicit = merge_csv(&["input1", "input2", "input3"], &["DateOfBirth:ASC"])?;
    assert_eq!(implicit, explicit);
    Ok(())
}

#[test]
fn test_dates_sort_before_text() -> Result<(), anyhow::Error> {
    let mut merge = Merge::new(common::fixtures(&["mixed"]));
    merge.with_ignore_lines(Regex::new("^#")?);
    merge.with_endl("\n");

    merge.add_sort("DateOfBirth".to_string());
    let merged = merge.run()?;
    assert_eq!(
        merged.body("\n"),
        "Roe,Rick,rickroe@example.com,Red,7/4/1985\nDoe,Jane,janedoe@example.com,Blue,unknown"
    );

    merge.with_sort(vec!["DateOfBirth:desc".to_string()]);
    let merged = merge.run()?;
    assert_eq!(merged.rows()[0].cell(0), Some("Doe"));
    Ok(())
}

#[test]
fn test_body_round_trip() -> Result<(), anyhow::Error> {
    let mut merge = Merge::new(common::fixtures(&["input1", "input2", "input3"]));
    merge.add_sort("FavoriteColor".to_string());
    let merged = merge.run()?;
    let body = merged.body("\n");
    let cells: Vec<Vec<String>> = body
        .split('\n')
        .map(|line| line.split(',').map(|cell| cell.to_string()).collect())
        .collect();
    let rows: Vec<Vec<String>> = merged.rows().iter().map(|row| row.cells().clone()).collect();
    assert_eq!(cells, rows);
    Ok(())
}

#[test]
fn test_merge_to_output_file() -> Result<(), anyhow::Error> {
    common::setup();
    let output_path = common::temp_file_name("./target/results/");

    let mut merge = Merge::new(common::fixtures(&["input1", "input2", "input3"]));
    merge.add_sort("FavoriteColor:asc".to_string());
    merge.add_sort("LastName:asc".to_string());
    merge.with_endl("\n");
    merge.with_output(output_path.clone());
    merge.merge()?;

    let lines = common::read_lines(output_path.clone())?;
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], common::HEADER);
    assert_eq!(lines[1], "Miller,Jessica,jessicamiller@example.com,Blue,3/3/1989");
    assert_eq!(lines[6], "Davis,John,johndavis@example.com,Teal,11/1/1986");

    // written verbatim, no trailing line separator
    let content = fs::read_to_string(&output_path)?;
    assert!(!content.ends_with('\n'));
    fs::remove_file(output_path)?;
    Ok(())
}

#[test]
fn test_merge_replaces_existing_output() -> Result<(), anyhow::Error> {
    common::setup();
    let output_path = common::temp_file_name("./target/results/");
    fs::write(&output_path, "stale content that is longer than the merged document\n".repeat(10))?;

    let mut merge = Merge::new(common::fixtures(&["single"]));
    merge.with_endl("\n");
    merge.with_output(output_path.clone());
    merge.merge()?;

    let content = fs::read_to_string(&output_path)?;
    assert_eq!(content, format!("{}\nSmith,John,johnsmith@example.com,Blue,1/1/1990", common::HEADER));
    fs::remove_file(output_path)?;
    Ok(())
}
