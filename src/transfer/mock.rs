use std::time::Duration;

use bytes::Bytes;
use tokio::time::sleep;

use crate::{
    app::util::cancel::CancelToken,
    assets::{models::asset::sniff_mime, store::AssetStore},
    styles::{models::style::Style, service::model_config_for_style},
    transfer::{
        errors::TransferError,
        models::{
            transfer_outcome::{TransferOutcome, TransferSuccess},
            transfer_progress::{report, ProgressSender, TransferProgress},
        },
    },
};

pub const MOCK_STEP: Duration = Duration::from_millis(200);
const MOCK_STEPS: u32 = 10;

/// Stand-in for the backend while developing the UI: walks through the
/// progress steps and hands the original photo back as the result.
pub async fn mock_style_transfer(
    photo: Bytes,
    style: &Style,
    assets: &AssetStore,
    progress: &ProgressSender,
    cancel: &CancelToken,
    step: Duration,
) -> TransferOutcome {
    let model_config = model_config_for_style(style);

    for n in 1..=MOCK_STEPS {
        tokio::select! {
            _ = sleep(step) => {}
            _ = cancel.cancelled() => return TransferOutcome::Failure(TransferError::Cancelled),
        }

        // The last step completes instead of reporting 100%; reported
        // progress stays under the 95% ceiling the real poll loop uses.
        if n < MOCK_STEPS {
            report(
                progress,
                TransferProgress::Simulating {
                    label: model_config.label.to_string(),
                    percent: n * 10,
                },
            );
        }
    }

    let result = assets.insert(sniff_mime(&photo), photo.clone()).await;

    TransferOutcome::Success(Box::new(TransferSuccess {
        result,
        bytes: photo,
        remote_url: None,
        model: model_config.model,
        cost: 0.0,
        time: model_config.time,
        ai_selected_artist: None,
        selection_method: None,
        selection_details: None,
        is_mock: true,
    }))
}
