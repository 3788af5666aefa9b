#[cfg(test)]
mod test {
    use assert_cmd::prelude::*;
    use predicates::prelude::*;
    use std::process::Command;

    #[test]
    fn unknown_subcommand_fails_with_usage() -> Result<(), Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin("tsdbcli")?;

        cmd.arg("foobar");
        cmd.assert().failure().stderr(predicate::str::contains("unrecognized"));

        Ok(())
    }

    #[test]
    fn write_then_query_round_trips_through_the_binary() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;

        let mut write = Command::cargo_bin("tsdbcli")?;
        write
            .arg("--path")
            .arg(dir.path())
            .arg("write")
            .arg("--db")
            .arg("metrics")
            .arg("--series")
            .arg("cpu")
            .arg("--field")
            .arg("value:float")
            .arg("--point")
            .arg("100:0:1.0")
            .arg("--point")
            .arg("200:0:2.0");
        write.assert().success().stdout(predicate::str::contains("ok"));

        let mut query = Command::cargo_bin("tsdbcli")?;
        query
            .arg("--path")
            .arg(dir.path())
            .arg("query")
            .arg("--db")
            .arg("metrics")
            .arg("--series")
            .arg("cpu")
            .arg("--columns")
            .arg("value")
            .arg("--start")
            .arg("0")
            .arg("--end")
            .arg("1000");
        query
            .assert()
            .success()
            .stdout(predicate::str::contains("200\t0\t2.0"))
            .stdout(predicate::str::contains("100\t0\t1.0"));

        Ok(())
    }

    #[test]
    fn query_against_unwritten_series_fails() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let mut query = Command::cargo_bin("tsdbcli")?;
        query
            .arg("--path")
            .arg(dir.path())
            .arg("query")
            .arg("--db")
            .arg("metrics")
            .arg("--series")
            .arg("cpu")
            .arg("--columns")
            .arg("value")
            .arg("--start")
            .arg("0")
            .arg("--end")
            .arg("1000");
        query.assert().failure();

        Ok(())
    }
}
