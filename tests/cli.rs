mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use mockito::{Matcher, Server};
    use predicates::prelude::*;
    use predicates::str::{contains, is_empty};

    use std::collections::HashSet;
    use std::io::Write;
    use std::process::{Command, Stdio};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "pathprobe";

    const URL_MISSING: &str = "-u (target URL) flag must be specified";
    const WORDLIST_MISSING: &str = "-w (wordlist) flag must be specified";

    fn wordlist(content: &str) -> Result<tempfile::NamedTempFile, std::io::Error> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        Ok(file)
    }

    #[tokio::test]
    async fn test_exit__when_url_missing() -> TestResult {
        let mut server = Server::new_async().await;
        let m = server.mock("GET", Matcher::Any).expect(0).create_async().await;
        let file = wordlist("admin\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("-w").arg(file.path());

        cmd.assert()
            .code(1)
            .stdout(is_empty())
            .stderr(contains(URL_MISSING))
            .stderr(contains(WORDLIST_MISSING).not());
        m.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_exit__when_wordlist_missing() -> TestResult {
        let mut server = Server::new_async().await;
        let m = server.mock("GET", Matcher::Any).expect(0).create_async().await;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("-u").arg(server.url());

        cmd.assert()
            .code(1)
            .stdout(is_empty())
            .stderr(contains(WORDLIST_MISSING))
            .stderr(contains(URL_MISSING).not());
        m.assert_async().await;
        Ok(())
    }

    #[test]
    fn test_exit__when_both_missing() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.assert()
            .code(1)
            .stderr(contains(URL_MISSING))
            .stderr(contains(WORDLIST_MISSING));
        Ok(())
    }

    #[test]
    fn test_exit__when_wordlist_unreadable() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("-u")
            .arg("http://127.0.0.1:1")
            .arg("-w")
            .arg(dir.path().join("missing.txt"));

        cmd.assert()
            .code(1)
            .stderr(contains("Could not read wordlist"));
        Ok(())
    }

    #[test]
    fn test_exit__when_zero_threads() -> TestResult {
        let file = wordlist("admin")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("-u")
            .arg("http://127.0.0.1:1")
            .arg("-w")
            .arg(file.path())
            .arg("-t")
            .arg("0");

        cmd.assert().code(1).stderr(contains("-t (threads)"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__json_file() -> TestResult {
        let mut server = Server::new_async().await;
        let _admin = server
            .mock("GET", "/admin")
            .with_status(200)
            .with_body("OK")
            .create_async()
            .await;
        let _login = server
            .mock("GET", "/login")
            .with_status(404)
            .with_body("")
            .create_async()
            .await;
        let file = wordlist("admin\nlogin")?;
        let out_dir = tempfile::tempdir()?;
        let out_path = out_dir.path().join("results.json");
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("-u")
            .arg(server.url())
            .arg("-w")
            .arg(file.path())
            .arg("-o")
            .arg(&out_path);

        // Order is not deterministic so can't assert it
        cmd.assert()
            .success()
            .stdout(contains(format!("{}/admin 200 2\n", server.url())))
            .stdout(contains(format!("{}/login 404 0\n", server.url())));

        let written: Vec<serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(&out_path)?)?;
        let written: HashSet<String> = written.iter().map(|v| v.to_string()).collect();
        let expected: HashSet<String> = [
            serde_json::json!({"url": server.url(), "path": "admin", "statusCode": 200, "contentLength": 2}),
            serde_json::json!({"url": server.url(), "path": "login", "statusCode": 404, "contentLength": 0}),
        ]
        .iter()
        .map(|v| v.to_string())
        .collect();
        assert_eq!(written, expected);
        Ok(())
    }

    #[tokio::test]
    async fn test_output__single_thread_keeps_order() -> TestResult {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", Matcher::Any)
            .with_status(404)
            .create_async()
            .await;
        let words: Vec<String> = (0..15).map(|i| format!("path{}", i)).collect();
        let file = wordlist(&words.join("\n"))?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("-u")
            .arg(server.url())
            .arg("-w")
            .arg(file.path())
            .arg("-t")
            .arg("1");

        let expected: String = words
            .iter()
            .map(|w| format!("{}/{} 404 0\n", server.url(), w))
            .collect();
        cmd.assert().success().stdout(expected);
        Ok(())
    }

    #[test]
    fn test_output__unreachable_host_still_reports_every_word() -> TestResult {
        let file = wordlist("a\nb\nc")?;
        let out_dir = tempfile::tempdir()?;
        let out_path = out_dir.path().join("results.json");
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("-u")
            .arg("http://127.0.0.1:1")
            .arg("-w")
            .arg(file.path())
            .arg("-o")
            .arg(&out_path);

        cmd.assert()
            .success()
            .stdout(contains("http://127.0.0.1:1/a 0 0\n"))
            .stdout(contains("http://127.0.0.1:1/b 0 0\n"))
            .stdout(contains("http://127.0.0.1:1/c 0 0\n"));

        let written: Vec<serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(&out_path)?)?;
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|v| v["statusCode"] == 0));
        Ok(())
    }

    #[test]
    fn test_output__write_failure_is_a_warning() -> TestResult {
        let file = wordlist("a")?;
        let out_dir = tempfile::tempdir()?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("-u")
            .arg("http://127.0.0.1:1")
            .arg("-w")
            .arg(file.path())
            .arg("-o")
            .arg(out_dir.path().join("missing_dir").join("out.json"));

        cmd.assert()
            .success()
            .stdout(contains("http://127.0.0.1:1/a 0 0\n"))
            .stderr(contains("Warning: Could not write output file"));
        Ok(())
    }

    #[test]
    fn test_output__closed_stdout_still_writes_json() -> TestResult {
        let words: Vec<String> = (0..500).map(|i| format!("w{}", i)).collect();
        let file = wordlist(&words.join("\n"))?;
        let out_dir = tempfile::tempdir()?;
        let out_path = out_dir.path().join("results.json");

        let mut child = Command::cargo_bin(NAME)?
            .arg("-u")
            .arg("http://127.0.0.1:1")
            .arg("-w")
            .arg(file.path())
            .arg("-t")
            .arg("4")
            .arg("-o")
            .arg(&out_path)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // Like `| head -0`: nobody will ever read the progress lines
        drop(child.stdout.take());
        let status = child.wait()?;

        assert_eq!(status.code(), Some(0));
        let written: Vec<serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(&out_path)?)?;
        assert_eq!(written.len(), 500);
        Ok(())
    }
}
