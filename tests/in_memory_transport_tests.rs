#![cfg(feature = "std")]

use airstrike::{InMemoryTransport, Message, Transport};

#[tokio::test]
async fn messages_cross_in_order() -> anyhow::Result<()> {
    let (mut a, mut b) = InMemoryTransport::pair();
    a.send(Message::Attack { r: 1, c: 1 }).await?;
    a.send(Message::Attack { r: 2, c: 2 }).await?;
    b.send(Message::SyncTurn { next_player: 1 }).await?;

    assert_eq!(b.recv().await?, Message::Attack { r: 1, c: 1 });
    assert_eq!(b.recv().await?, Message::Attack { r: 2, c: 2 });
    assert_eq!(a.recv().await?, Message::SyncTurn { next_player: 1 });
    Ok(())
}

#[tokio::test]
async fn dropping_one_end_closes_the_other() -> anyhow::Result<()> {
    let (mut a, b) = InMemoryTransport::pair();
    drop(b);
    assert!(a.recv().await.is_err());
    assert!(a.send(Message::Attack { r: 0, c: 0 }).await.is_err());
    Ok(())
}

#[tokio::test]
async fn queued_messages_drain_before_close() -> anyhow::Result<()> {
    let (mut a, mut b) = InMemoryTransport::pair();
    a.send(Message::Attack { r: 3, c: 4 }).await?;
    drop(a);
    assert_eq!(b.recv().await?, Message::Attack { r: 3, c: 4 });
    assert!(b.recv().await.is_err());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn works_across_tasks() -> anyhow::Result<()> {
    let (mut a, mut b) = InMemoryTransport::pair();
    let echo = tokio::spawn(async move {
        while let Ok(msg) = b.recv().await {
            if b.send(msg).await.is_err() {
                break;
            }
        }
    });
    a.send(Message::Attack { r: 9, c: 0 }).await?;
    assert_eq!(a.recv().await?, Message::Attack { r: 9, c: 0 });
    drop(a);
    echo.await?;
    Ok(())
}
