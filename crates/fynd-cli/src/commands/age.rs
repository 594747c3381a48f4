use anyhow::{Result, bail};
use fynd_core::account::{age_on, parse_dob};

pub fn run(dob: &str, today: Option<&str>) -> Result<()> {
    let today = match today {
        Some(raw) => match parse_dob(raw) {
            Some(date) => date,
            None => bail!("Reference date '{}' is not d/m/yyyy", raw),
        },
        None => chrono::Local::now().date_naive(),
    };

    if parse_dob(dob).is_none() {
        println!("⚠️  '{}' is not a valid d/m/yyyy date; age defaults to 0", dob);
    }
    println!("{}", age_on(dob, today));
    Ok(())
}
