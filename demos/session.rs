use ricker::surface::recording::RecordingFactory;
use ricker::{spawn_session, DispatchOutcome, SessionConfig, TabSessionManager, UiEvent};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = SessionConfig::builder()
        .new_tab_title("New Tab")
        .build()?;

    // Surfaces only record what they are asked to do; swap in a real web view here.
    let factory = RecordingFactory::new();
    let manager = TabSessionManager::with_config(config, Box::new(factory.clone()));
    let (session, join_handle) = spawn_session(manager);

    let mut events = session.subscribe_events();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            println!("event: {}", serde_json::to_string(&event).unwrap_or_default());
        }
    });

    session.dispatch(UiEvent::SentinelActivated).await?;
    session.dispatch(UiEvent::NavSubmit { index: 1, input: "example.com".into() }).await?;

    if let DispatchOutcome::EngineMenu { tab_id, engines } = session.dispatch(UiEvent::TabDoubleActivated(0)).await? {
        let names: Vec<_> = engines.iter().map(|e| e.name).collect();
        println!("engine menu for tab {tab_id}: {}", names.join(", "));
        session.dispatch(UiEvent::EngineChosen { tab_id, name: "DuckDuckGo".into() }).await?;
    }

    session.dispatch(UiEvent::TabMoved { from: 1, to: 0 }).await?;
    session.dispatch(UiEvent::HomepageChosen("https://example.org".into())).await?;
    session.dispatch(UiEvent::TabCloseRequested(0)).await?;
    let refused = session.dispatch(UiEvent::TabCloseRequested(0)).await?;
    println!("closing the last tab: {refused:?}");

    let snapshot = session.snapshot().await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    for n in 0..factory.created() {
        if let Some(log) = factory.log(n) {
            println!("surface {n}: {:?}", log.calls());
        }
    }

    session.shutdown().await?;
    join_handle.await?;
    Ok(())
}
