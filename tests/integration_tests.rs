use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use hlsprep::adapters::{LocalFsAdapter, TomlConfigAdapter};
use hlsprep::app::{AppContainer, DefaultAppContainer};
use hlsprep::domain::model::{ConvertRequest, PackageRequest};
use hlsprep::ports::CommandPort;
use hlsprep::*;

/// Test utilities for bundle builds
mod test_utils {
    use super::*;

    pub const BASE_PLAYLIST: &str = "#EXTM3U
#EXT-X-VERSION:7
#EXT-X-INDEPENDENT-SEGMENTS

#EXT-X-STREAM-INF:AVERAGE-BANDWIDTH=9000000,BANDWIDTH=12000000,CODECS=\"hvc1.2.4.L150.B0\",RESOLUTION=3840x2160,FRAME-RATE=30.000
hevc-2160p/index.m3u8
#EXT-X-STREAM-INF:AVERAGE-BANDWIDTH=4000000,BANDWIDTH=5000000,CODECS=\"hvc1.2.4.L120.B0\",RESOLUTION=1920x1080,FRAME-RATE=30.000
hevc-1080p/index.m3u8
#EXT-X-STREAM-INF:AVERAGE-BANDWIDTH=3000000,BANDWIDTH=4000000,CODECS=\"avc1.640033\",RESOLUTION=3840x2160,FRAME-RATE=30.000
avc-2160p/index.m3u8
#EXT-X-STREAM-INF:AVERAGE-BANDWIDTH=1000000,BANDWIDTH=1500000,CODECS=\"avc1.640020\",RESOLUTION=960x540,FRAME-RATE=30.000
avc-540p/index.m3u8

#EXT-X-I-FRAME-STREAM-INF:BANDWIDTH=900000,CODECS=\"hvc1.2.4.L150.B0\",RESOLUTION=3840x2160,URI=\"hevc-2160p/iframe_index.m3u8\"
";

    /// Stands in for the Apple segmenters: records the invocations and
    /// writes the base playlist when the playlist creator runs
    pub struct FakeTools {
        pub invocations: Mutex<Vec<ToolInvocation>>,
    }

    impl FakeTools {
        pub fn new() -> Self {
            Self {
                invocations: Mutex::new(Vec::new()),
            }
        }

        pub fn recorded(&self) -> Vec<ToolInvocation> {
            self.invocations.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandPort for FakeTools {
        async fn run(&self, invocation: &ToolInvocation) -> Result<(), DomainError> {
            self.invocations.lock().unwrap().push(invocation.clone());
            if invocation.program == "variantplaylistcreator" {
                let cwd = invocation.cwd.as_ref().expect("creator runs in the bundle");
                std::fs::write(cwd.join("index.m3u8"), BASE_PLAYLIST)?;
            }
            Ok(())
        }

        async fn capture(&self, invocation: &ToolInvocation) -> Result<String, DomainError> {
            self.invocations.lock().unwrap().push(invocation.clone());
            Ok(String::new())
        }
    }

    /// Input directory with the given empty files
    pub fn input_dir(files: &[&str]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for file in files {
            std::fs::write(dir.path().join(file), b"").unwrap();
        }
        dir
    }

    pub fn container(tools: Arc<FakeTools>) -> DefaultAppContainer {
        DefaultAppContainer::with_ports(tools, Arc::new(LocalFsAdapter::new()), PipelineConfig::default())
    }

    pub fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }
}

use test_utils::*;

#[tokio::test]
async fn test_full_bundle() {
    let dir = input_dir(&[
        "hevc-2160p.mov",
        "hevc-1080p.mov",
        "avc-2160p.mov",
        "avc-540p.mov",
        "aac-lc-128.m4a",
        "aac-he-64.m4a",
        "subs-en.vtt",
        "fr-ca.vtt",
        "poster.jpeg",
    ]);
    let chapters = dir.path().join("meta-chapters");
    std::fs::create_dir(&chapters).unwrap();
    std::fs::write(chapters.join("index.m3u8"), "#EXTM3U\n").unwrap();

    let tools = Arc::new(FakeTools::new());
    let report = container(Arc::clone(&tools))
        .package_interactor()
        .execute(PackageRequest {
            input_dir: dir.path().to_path_buf(),
        })
        .await
        .unwrap();

    // bundle id is a 32 character hex UUID inside the input directory
    assert_eq!(report.output_dir.parent(), Some(dir.path()));
    let id = report.output_dir.file_name().unwrap().to_string_lossy().to_string();
    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

    let scores: Vec<String> = report
        .variants
        .iter()
        .map(|v| v.score.unwrap().to_string())
        .collect();
    assert_eq!(scores, vec!["2.5", "2.3", "1.5", "1.1"]);

    let manifest = read(&report.output_dir.join("index.m3u8"));
    let lines: Vec<&str> = manifest.lines().collect();
    let first_stream = lines
        .iter()
        .position(|l| l.starts_with("#EXT-X-STREAM-INF"))
        .unwrap();
    let media: Vec<&&str> = lines
        .iter()
        .filter(|l| l.starts_with("#EXT-X-MEDIA:"))
        .collect();
    assert_eq!(media.len(), 5);
    assert!(lines
        .iter()
        .rposition(|l| l.starts_with("#EXT-X-MEDIA:"))
        .unwrap()
        < first_stream);

    assert!(manifest.contains(
        "#EXT-X-MEDIA:TYPE=SUBTITLES,GROUP-ID=\"subtitles\",NAME=\"French (Canada)\",LANGUAGE=\"fr\",AUTOSELECT=YES,DEFAULT=NO"
    ));
    assert!(manifest.contains("URI=\"subs-fr-ca/index.m3u8\""));
    assert!(manifest.contains(
        "#EXT-X-MEDIA:TYPE=SUBTITLES,GROUP-ID=\"metadata\",NAME=\"chapters\",FORCED=NO,URI=\"meta-chapters/index.m3u8\""
    ));
    assert!(manifest.contains(
        "CODECS=\"avc1.640020,mp4a.40.5\",RESOLUTION=960x540,FRAME-RATE=30.000,AUDIO=\"aac-he-64\",SUBTITLES=\"subtitles\""
    ));
    assert!(manifest.contains(
        "CODECS=\"hvc1.2.4.L120.B0,mp4a.40.2\",RESOLUTION=1920x1080,FRAME-RATE=30.000,AUDIO=\"aac-lc-128\",SUBTITLES=\"subtitles\""
    ));
    assert!(manifest.ends_with("URI=\"hevc-2160p/iframe_index.m3u8\"\n"));

    let programs: Vec<String> = tools.recorded().into_iter().map(|i| i.program).collect();
    assert_eq!(programs.iter().filter(|p| *p == "mediafilesegmenter").count(), 6);
    assert_eq!(programs.iter().filter(|p| *p == "mediasubtitlesegmenter").count(), 2);
    assert_eq!(programs.last().unwrap(), "variantplaylistcreator");

    assert!(report.output_dir.join("meta-chapters/index.m3u8").is_file());
    assert!(report.output_dir.join("poster.jpeg").is_file());
}

#[tokio::test]
async fn test_unknown_resolution_aborts_early() {
    let dir = input_dir(&["avc-480p.mov", "poster.jpeg"]);
    let tools = Arc::new(FakeTools::new());

    let err = container(Arc::clone(&tools))
        .package_interactor()
        .execute(PackageRequest {
            input_dir: dir.path().to_path_buf(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::UnknownResolution("480p".to_string()));
    assert!(tools.recorded().is_empty());
}

#[tokio::test]
async fn test_bad_subtitle_name_is_fatal() {
    let dir = input_dir(&["avc-540p.mov", "english.vtt", "poster.jpeg"]);
    let tools = Arc::new(FakeTools::new());

    let err = container(Arc::clone(&tools))
        .package_interactor()
        .execute(PackageRequest {
            input_dir: dir.path().to_path_buf(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::InvalidSubtitleName("english.vtt".to_string()));
    assert!(err.to_string().contains("Expected format"));
    assert!(tools.recorded().is_empty());
}

#[tokio::test]
async fn test_duplicate_subtitle_language_rejected() {
    let dir = input_dir(&["avc-540p.mov", "en.vtt", "subs-en.vtt", "poster.jpeg"]);

    let err = container(Arc::new(FakeTools::new()))
        .package_interactor()
        .execute(PackageRequest {
            input_dir: dir.path().to_path_buf(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::DuplicateSubtitle { ref output_dir, .. } if output_dir == "subs-en"));
}

#[tokio::test]
async fn test_itt_conversion_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("trailer.itt");
    std::fs::write(
        &input,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<tt xmlns="http://www.w3.org/ns/ttml" xmlns:tts="http://www.w3.org/ns/ttml#styling">
  <body>
    <div>
      <p begin="00:00:01:15" end="00:00:03:00">In a world</p>
      <p begin="00:00:03:12" end="00:00:04:12" region="top" tts:fontStyle="italic">[thunder]</p>
    </div>
  </body>
</tt>"#,
    )
    .unwrap();

    let output = container(Arc::new(FakeTools::new()))
        .convert_interactor()
        .execute(ConvertRequest { input, fps: 24 })
        .await
        .unwrap();

    assert_eq!(
        read(&output),
        "WEBVTT\n\n00:00:01.625 --> 00:00:03.000 line:95%\nIn a world\n\n00:00:03.500 --> 00:00:04.500 line:5%\n<i>[thunder]</i>"
    );
}

#[test]
fn test_config_file_changes_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hlsprep.toml");
    std::fs::write(
        &path,
        r#"
[scoring.codec_ranks]
avc = 1
hevc = 2
av1 = 3

[tools]
media_segmenter = "/opt/hls/mediafilesegmenter"
"#,
    )
    .unwrap();

    let config = TomlConfigAdapter::load_with(Some(&path), None, Path::new("unused")).unwrap();
    assert_eq!(config.scoring.codec_ranks["av1"], 3);
    assert_eq!(config.tools.media_segmenter, "/opt/hls/mediafilesegmenter");
    assert_eq!(config.tools.subtitle_segmenter, "mediasubtitlesegmenter");
}
