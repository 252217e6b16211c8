// Streaming dashboard service - Progressive page delivery
use crate::application::dashboard_service::DashboardService;
use crate::domain::dashboard::Block;
use crate::domain::filter::FilterSelection;
use crate::domain::view::View;
use serde::Serialize;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSkeleton {
    pub index: usize,
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StreamMessage {
    Skeleton {
        view: View,
        title: String,
        blocks: Vec<BlockSkeleton>,
    },
    Block {
        index: usize,
        block: Block,
    },
    #[serde(rename_all = "camelCase")]
    Complete { total_blocks: usize, duration_ms: i64 },
    Error {
        message: String,
    },
}

#[derive(Clone)]
pub struct StreamingDashboardService {
    dashboard: DashboardService,
}

impl StreamingDashboardService {
    pub fn new(dashboard: DashboardService) -> Self {
        Self { dashboard }
    }

    /// Renders `view` in a background task and sends the skeleton, every block
    /// in page order, then a completion event.
    pub fn stream_view(&self, view: View, selection: FilterSelection) -> mpsc::Receiver<StreamMessage> {
        let (tx, rx) = mpsc::channel(100);
        let dashboard = self.dashboard.clone();

        tokio::spawn(async move {
            let start_time = Instant::now();
            let page = match dashboard.render(view, &selection).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::error!("Failed to render {}: {}", view, e);
                    let _ = tx.send(StreamMessage::Error { message: e.to_string() }).await;
                    return;
                }
            };
            let total_blocks = page.blocks.len();

            let skeleton = StreamMessage::Skeleton {
                view: page.view,
                title: page.title.clone(),
                blocks: page
                    .blocks
                    .iter()
                    .enumerate()
                    .map(|(index, block)| BlockSkeleton {
                        index,
                        kind: block.kind(),
                    })
                    .collect(),
            };
            if tx.send(skeleton).await.is_err() {
                tracing::debug!("Stream for {} closed before skeleton", view);
                return;
            }

            for (index, block) in page.blocks.into_iter().enumerate() {
                if tx.send(StreamMessage::Block { index, block }).await.is_err() {
                    tracing::debug!("Stream for {} closed at block {}", view, index);
                    return;
                }
            }

            let duration_ms = start_time.elapsed().as_millis() as i64;
            let _ = tx
                .send(StreamMessage::Complete {
                    total_blocks,
                    duration_ms,
                })
                .await;
        });

        rx
    }
}
