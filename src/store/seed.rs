// Demo dataset written by `reachgraph init`.
//
// Eight users in one connected friendship network, one post each with
// curated cover metrics, a small ad catalogue and a handful of likes so the
// affinity weights are not all equal.

use chrono::{DateTime, Duration, Utc};

use crate::model::{Ad, Network, Post};

const USERS: [(&str, &str); 8] = [
    ("U001", "Ana García"),
    ("U002", "Beto Fernández"),
    ("U003", "Carla López"),
    ("U004", "Diego Martínez"),
    ("U005", "Eva Rodríguez"),
    ("U006", "Franco Silva"),
    ("U007", "Gisela Torres"),
    ("U008", "Hugo Vargas"),
];

const FRIENDSHIPS: [(&str, &str); 9] = [
    ("U001", "U002"),
    ("U001", "U003"),
    ("U002", "U004"),
    ("U002", "U005"),
    ("U003", "U006"),
    ("U004", "U007"),
    ("U005", "U006"),
    ("U006", "U008"),
    ("U007", "U008"),
];

/// (id, author, content, hours old, likes, size, benefit)
const POSTS: [(&str, &str, &str, i64, u32, u32, i64); 8] = [
    ("P001", "U001", "Mi primera publicación en la red!", 30, 120, 3, 150),
    ("P002", "U002", "Compartiendo conocimiento sobre programación", 52, 250, 4, 300),
    ("P003", "U003", "Foto del día", 12, 80, 2, 100),
    ("P004", "U004", "Reflexión del fin de semana", 70, 350, 5, 400),
    ("P005", "U005", "Nuevo artículo en mi blog", 6, 45, 1, 60),
    ("P006", "U006", "Tutorial de algoritmos", 40, 180, 3, 220),
    ("P007", "U007", "Evento próximo en la universidad", 18, 95, 2, 120),
    ("P008", "U008", "Logro desbloqueado!", 24, 200, 3, 250),
];

const ADS: [(&str, u32, u32); 6] = [
    ("Banner Principal", 5, 100),
    ("Video Promocional", 8, 180),
    ("Pop-up Interactivo", 3, 60),
    ("Story Patrocinada", 4, 90),
    ("Banner Lateral", 2, 40),
    ("Video Corto", 6, 130),
];

/// (user, post) likes already counted in the posts' totals
const LIKES: [(&str, &str); 12] = [
    ("U001", "P002"),
    ("U001", "P003"),
    ("U002", "P001"),
    ("U002", "P003"),
    ("U002", "P004"),
    ("U003", "P002"),
    ("U003", "P005"),
    ("U004", "P003"),
    ("U005", "P002"),
    ("U005", "P006"),
    ("U006", "P005"),
    ("U008", "P007"),
];

/// Build the demo network with timestamps relative to `now`.
pub fn demo_network(now: DateTime<Utc>) -> Network {
    let mut network = Network::new();

    for (id, name) in USERS {
        network.add_user(id, name);
    }
    for (a, b) in FRIENDSHIPS {
        network.add_friendship(a, b);
    }
    for (id, author, content, hours_old, likes, size, benefit) in POSTS {
        network.add_post(Post::with_metrics(
            id,
            author,
            content,
            now - Duration::hours(hours_old),
            likes,
            size,
            benefit,
        ));
    }
    for (name, cost, reach) in ADS {
        network.add_ad(Ad::new(name, cost, reach));
    }
    network.import_likes(
        LIKES
            .iter()
            .enumerate()
            .map(|(i, (user, post))| (*user, *post, now - Duration::minutes(10 * i as i64))),
    );

    network
}
