use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command; // Run programs
use tempfile;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

const CAT_TEXT: &str = "the cat sat on the mat the cat ran";
const CAT_BITS: &str = "1100101011110101100100";

// Write the text into the temporary directory so the test does not depend on checked in files.
fn write_input(temp_dir: &tempfile::TempDir,name: &str,txt: &str) -> Result<PathBuf,Box<dyn std::error::Error>> {
    let path = temp_dir.path().join(name);
    std::fs::write(&path,txt)?;
    Ok(path)
}

#[test]
fn compress_bits() -> STDRESULT {
    let mut cmd = Command::cargo_bin("wordhuff")?;
    let temp_dir = tempfile::tempdir()?;
    let in_path = write_input(&temp_dir,"cat.txt",CAT_TEXT)?;
    cmd.arg("compress")
        .arg("-i").arg(&in_path)
        .assert()
        .success()
        .stdout(predicate::str::diff([CAT_BITS,"\n"].concat()));
    Ok(())
}

#[test]
fn compress_codes_and_hex() -> STDRESULT {
    let mut cmd = Command::cargo_bin("wordhuff")?;
    let temp_dir = tempfile::tempdir()?;
    let in_path = write_input(&temp_dir,"cat.txt",CAT_TEXT)?;
    cmd.arg("compress")
        .arg("-i").arg(&in_path)
        .arg("--codes")
        .arg("--hex")
        .assert()
        .success()
        .stdout(predicate::str::diff("CAF590\ncat\t00\nmat\t010\non\t011\nran\t100\nsat\t101\nthe\t11\n"));
    Ok(())
}

#[test]
fn roundtrip_report() -> STDRESULT {
    let mut cmd = Command::cargo_bin("wordhuff")?;
    let temp_dir = tempfile::tempdir()?;
    let in_path = write_input(&temp_dir,"cat.txt","the  cat\tsat on\nthe mat the cat ran\n")?;
    cmd.arg("roundtrip")
        .arg("-i").arg(&in_path)
        .arg("--progress")
        .assert()
        .success()
        .stdout(predicate::str::contains(["Compressed Data:\n",CAT_BITS].concat()))
        .stdout(predicate::str::contains("Compression Ratio:"))
        .stdout(predicate::str::contains(["Decompressed Text:\n",CAT_TEXT].concat()))
        .stderr(predicate::str::contains("Decompressing... 100.00%"));
    Ok(())
}

#[test]
fn decode_bits() -> STDRESULT {
    let mut cmd = Command::cargo_bin("wordhuff")?;
    let temp_dir = tempfile::tempdir()?;
    let in_path = write_input(&temp_dir,"cat.txt",CAT_TEXT)?;
    let bits_path = write_input(&temp_dir,"cat.bits",CAT_BITS)?;
    cmd.arg("decode")
        .arg("-i").arg(&in_path)
        .arg("-b").arg(&bits_path)
        .assert()
        .success()
        .stdout(predicate::str::diff([CAT_TEXT,"\n"].concat()));
    Ok(())
}

#[test]
fn decode_truncated() -> STDRESULT {
    let mut cmd = Command::cargo_bin("wordhuff")?;
    let temp_dir = tempfile::tempdir()?;
    let in_path = write_input(&temp_dir,"cat.txt",CAT_TEXT)?;
    let bits_path = write_input(&temp_dir,"cat.bits",&CAT_BITS[0..CAT_BITS.len()-1])?;
    cmd.arg("decode")
        .arg("-i").arg(&in_path)
        .arg("-b").arg(&bits_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("TruncatedStream"));
    Ok(())
}

#[test]
fn empty_input_fails() -> STDRESULT {
    let mut cmd = Command::cargo_bin("wordhuff")?;
    let temp_dir = tempfile::tempdir()?;
    let in_path = write_input(&temp_dir,"blank.txt"," \n\t ")?;
    cmd.arg("compress")
        .arg("-i").arg(&in_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("EmptyInput"));
    Ok(())
}
