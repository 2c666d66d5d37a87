use crate::board::Position;
use crate::movegen::legal_moves_into;
use crate::types::Move;

/// Pure perft node count: all leaf positions reachable from the current
/// one in exactly `depth` plies. One move buffer per remaining ply keeps
/// allocation out of the hot loop.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(pos: &mut Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        legal_moves_into(pos, buf);

        let mut nodes = 0u64;
        let count = buf.len();
        for i in 0..count {
            let mv = buf[i];
            pos.make_move(mv);
            nodes += inner(pos, depth - 1, rest);
            pos.unmake_move().expect("make/unmake are paired");
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}
