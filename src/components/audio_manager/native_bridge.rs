// Desktop-webview audio resource driven through `document::eval` scripts.
use super::controller::PlaybackController;
use super::resource::AudioResource;
use crate::error::PlayError;
use dioxus::prelude::*;
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use serde::Deserialize;
use std::time::Duration;

const MEDIA_POLL_INTERVAL: Duration = Duration::from_millis(250);

const NATIVE_AUDIO_BOOTSTRAP_JS: &str = r#"
(() => {
  if (window.__sitetuneAudioBridge) {
    return true;
  }

  const existing = document.getElementById("sitetune-audio-native");
  const audio = existing || document.createElement("audio");
  if (!existing) {
    audio.id = "sitetune-audio-native";
    audio.preload = "metadata";
    audio.style.display = "none";
    audio.setAttribute("playsinline", "true");
    document.body.appendChild(audio);
  }

  const errorMessage = () => {
    const code = audio.error ? audio.error.code : 0;
    switch (code) {
      case 1: return "Playback was aborted before the stream loaded.";
      case 2: return "Network error while loading this track.";
      case 3: return "Audio playback failed due to a decode error.";
      case 4: return "Failed to load audio because no supported source was found.";
      default: return "Unable to load this audio source.";
    }
  };

  const bridge = {
    audio,
    events: [],
    apply(cmd) {
      if (!cmd || !cmd.type) return;
      switch (cmd.type) {
        case "load":
          if (cmd.src && audio.src !== cmd.src) {
            audio.src = cmd.src;
          }
          break;
        case "pause":
          audio.pause();
          break;
        case "volume":
          if (typeof cmd.volume === "number") {
            audio.volume = Math.max(0, Math.min(1, cmd.volume));
          }
          break;
        default:
          break;
      }
    },
    async play() {
      try {
        await audio.play();
        return { ok: true, name: null, message: null };
      } catch (err) {
        return {
          ok: false,
          name: (err && err.name) || "Error",
          message: String((err && err.message) || ""),
        };
      }
    },
    drain() {
      const pending = bridge.events;
      bridge.events = [];
      return pending;
    },
  };

  audio.addEventListener("ended", () => bridge.events.push({ kind: "ended" }));
  audio.addEventListener("error", () => bridge.events.push({ kind: "error", message: errorMessage() }));

  window.__sitetuneAudioBridge = bridge;
  return true;
})();
"#;

#[derive(Debug, Deserialize)]
struct PlayReply {
    ok: bool,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum MediaEvent {
    Ended,
    Error {
        #[serde(default)]
        message: Option<String>,
    },
}

fn ensure_native_audio_bridge() {
    let _ = document::eval(NATIVE_AUDIO_BOOTSTRAP_JS);
}

fn native_audio_command(value: serde_json::Value) {
    ensure_native_audio_bridge();
    let payload = serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string());
    let script = format!(
        r#"(function () {{
            const bridge = window.__sitetuneAudioBridge;
            if (!bridge) return false;
            bridge.apply({payload});
            return true;
        }})();"#
    );
    let _ = document::eval(&script);
}

fn play_error_from_reply(reply: PlayReply) -> PlayError {
    let name = reply.name.unwrap_or_default();
    let detail = match reply.message.filter(|m| !m.is_empty()) {
        Some(message) => format!("{name}: {message}"),
        None => name.clone(),
    };
    match name.as_str() {
        "NotSupportedError" => PlayError::Resource(detail),
        _ => PlayError::Blocked(detail),
    }
}

/// `<audio>` element living inside the desktop webview.
#[derive(Clone, Default)]
pub struct WebviewAudioResource;

impl AudioResource for WebviewAudioResource {
    fn load(&self, url: &str) {
        native_audio_command(serde_json::json!({ "type": "load", "src": url }));
    }

    fn play(&self) -> LocalBoxFuture<'static, Result<(), PlayError>> {
        async move {
            ensure_native_audio_bridge();
            let eval = document::eval(
                r#"const bridge = window.__sitetuneAudioBridge;
                if (!bridge) {
                    return { ok: false, name: "NotSupportedError", message: "audio bridge missing" };
                }
                return await bridge.play();"#,
            );
            match eval.join::<PlayReply>().await {
                Ok(reply) if reply.ok => Ok(()),
                Ok(reply) => Err(play_error_from_reply(reply)),
                Err(err) => Err(PlayError::Blocked(format!("webview eval failed: {err:?}"))),
            }
        }
        .boxed_local()
    }

    fn pause(&self) {
        native_audio_command(serde_json::json!({ "type": "pause" }));
    }

    fn set_volume(&self, volume: f64) {
        native_audio_command(serde_json::json!({
            "type": "volume",
            "volume": volume.clamp(0.0, 1.0),
        }));
    }
}

async fn drain_media_events() -> Vec<MediaEvent> {
    ensure_native_audio_bridge();
    let eval = document::eval(
        r#"const bridge = window.__sitetuneAudioBridge;
        return bridge ? bridge.drain() : [];"#,
    );
    eval.join::<Vec<MediaEvent>>().await.unwrap_or_default()
}

/// Polls the webview for `ended` / `error` events and forwards them to the controller.
pub async fn poll_media_events(controller: PlaybackController<WebviewAudioResource>) {
    loop {
        tokio::time::sleep(MEDIA_POLL_INTERVAL).await;
        for event in drain_media_events().await {
            match event {
                MediaEvent::Ended => controller.on_track_ended().await,
                MediaEvent::Error { message } => {
                    let message = message.unwrap_or_else(|| "Unable to load this audio source.".into());
                    controller.on_resource_error(&message).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_events_decode() {
        let events: Vec<MediaEvent> = serde_json::from_value(serde_json::json!([
            {"kind": "ended"},
            {"kind": "error", "message": "Network error while loading this track."},
        ]))
        .unwrap();
        assert_eq!(
            events,
            vec![
                MediaEvent::Ended,
                MediaEvent::Error {
                    message: Some("Network error while loading this track.".into())
                },
            ]
        );
    }

    #[test]
    fn play_rejections_are_classified() {
        let blocked = play_error_from_reply(PlayReply {
            ok: false,
            name: Some("NotAllowedError".into()),
            message: Some("user didn't interact".into()),
        });
        assert_eq!(
            blocked,
            PlayError::Blocked("NotAllowedError: user didn't interact".into())
        );

        let broken = play_error_from_reply(PlayReply {
            ok: false,
            name: Some("NotSupportedError".into()),
            message: None,
        });
        assert_eq!(broken, PlayError::Resource("NotSupportedError".into()));
    }
}
